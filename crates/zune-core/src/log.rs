/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Stand-ins for the `log` crate macros when the `log` feature is off
//!
//! Arguments are still type checked, so variables only used in
//! log lines do not trigger unused warnings, but nothing is formatted.

// macros exported with #[macro_export] land in the crate root,
// re-exporting them here gives them the same path as the log crate
pub use crate::{
    __hdc_log_debug as debug, __hdc_log_error as error, __hdc_log_info as info,
    __hdc_log_trace as trace, __hdc_log_warn as warn
};

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_discard {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_error {
    ($($arg:tt)+) => { $crate::__hdc_log_discard!($($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_warn {
    ($($arg:tt)+) => { $crate::__hdc_log_discard!($($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_info {
    ($($arg:tt)+) => { $crate::__hdc_log_discard!($($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_debug {
    ($($arg:tt)+) => { $crate::__hdc_log_discard!($($arg)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hdc_log_trace {
    ($($arg:tt)+) => { $crate::__hdc_log_discard!($($arg)+) };
}
