/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a `Result`, or logs the error and exits with `$code` (1 if omitted).
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, 1)
    };
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit($code);
            }
        }
    };
}
