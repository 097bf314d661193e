//! Ergonomic macros for constructing and propagating errors.

/// Extract a result's success value, or return the error to the caller.
///
/// The single forwarding idiom: if the result holds an error, the enclosing
/// function immediately returns it, converted into the function's own result
/// type and still carrying the trace captured at the original failure site.
/// On success it yields the extracted value.
///
/// # Examples
///
/// ```
/// use backtrail::{Value, err, ok, take_or_forward};
///
/// fn read_config() -> Value<String> {
///     err("config missing").into()
/// }
///
/// fn startup() -> Value<usize> {
///     let config = take_or_forward!(read_config());
///     ok(config.len()).into()
/// }
///
/// let result = startup();
/// assert!(result.is_err());
/// assert_eq!(result.err(), "config missing");
/// ```
#[macro_export]
macro_rules! take_or_forward {
    ($result:expr) => {{
        let result = $result;
        if result.is_err() {
            return ::core::convert::From::from(result.forward());
        }
        result.take()
    }};
}

/// Construct an error from format arguments and return it from the enclosing
/// function.
///
/// ```
/// use backtrail::{Value, fail, ok};
///
/// fn checked_div(dividend: u32, divisor: u32) -> Value<u32> {
///     if divisor == 0 {
///         fail!("cannot divide {dividend} by zero");
///     }
///     ok(dividend / divisor).into()
/// }
///
/// assert_eq!(checked_div(6, 0).err(), "cannot divide 6 by zero");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        return ::core::convert::From::from($crate::err(::std::format!($($arg)+)))
    };
}

/// Return a formatted error unless a condition holds.
///
/// ```
/// use backtrail::{Value, ensure, ok};
///
/// fn admit(age: u32) -> Value<u32> {
///     ensure!(age >= 18, "must be 18+, got {age}");
///     ok(age).into()
/// }
///
/// assert!(admit(21).is_ok());
/// assert_eq!(admit(9).err(), "must be 18+, got 9");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::fail!($($arg)+);
        }
    };
}
