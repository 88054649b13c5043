//! Logging macros that capture the call site

/// Path of the enclosing function, e.g. `my_crate::module::handler`.
#[macro_export]
macro_rules! function {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__f);
        name.strip_suffix("::__f").unwrap_or(name)
    }};
}

/// Call-site `Location` of the macro invocation.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::std::file!(), $crate::function!(), ::std::line!())
    };
}

/// Name of the crate invoking the macro, used as the record source.
#[macro_export]
macro_rules! source {
    () => {
        $crate::source_from_module_path(::std::module_path!())
    };
}

/// Build a `Metadata` map.
///
/// ```
/// use proven_logger::metadata;
///
/// let metadata = metadata! { "node" => "n1", "zone" => "eu" };
/// assert_eq!(metadata.len(), 2);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut metadata = $crate::Metadata::new();
        $(
            metadata.insert(
                ::std::string::ToString::to_string(&$key),
                $crate::MetadataValue::from($value),
            );
        )+
        metadata
    }};
}

/// Log at an explicit level.
///
/// Formatting only happens when the level is enabled.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, metadata: $metadata:expr; $($arg:tt)+) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            let metadata: $crate::Metadata = $metadata;
            logger.log(
                level,
                ::std::format!($($arg)+),
                ::std::option::Option::Some(&metadata),
                $crate::source!(),
                $crate::location!(),
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                ::std::format!($($arg)+),
                ::std::option::Option::None,
                $crate::source!(),
                $crate::location!(),
            );
        }
    }};
}

/// Log at trace level
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log at debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log at info level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log at notice level
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log at warning level
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log at error level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log at critical level
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}
