#[cfg(feature = "tracing")]
macro_rules! htrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "collapsible_header", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! htrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! hdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "collapsible_header", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! hwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "collapsible_header", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! hwarn {
    ($($tt:tt)*) => {};
}
