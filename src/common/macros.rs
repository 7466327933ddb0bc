/// Logs a failed backend call together with its call site.
///
/// Usage: `log_err!(err, endpoint)`. The endpoint is whatever identifies the
/// request: a collection path, a record id, a form name.
#[macro_export]
macro_rules! log_err {
    ($err:expr, $endpoint:expr) => {{
        ::log::error!(
            "{}:{} {} failed: {}",
            file!(),
            line!(),
            $endpoint,
            $err
        );
    }};
}
