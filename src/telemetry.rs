use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out by quiz play",
        &["category"]
    )
    .expect("quiz_questions_served_total is registered once");
    pub static ref QUIZ_FINISHED_CNTR: CounterVec = register_counter_vec!(
        "quiz_finished_total",
        "Number of quiz requests that found no question left",
        &["category"]
    )
    .expect("quiz_finished_total is registered once");
}

pub fn init_tracing() {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let filter_layer =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
