//! Leveled assertions. Every check in the engine is tagged with a cost level; only the checks at or
//! below [`CAGEY_ASSERT_LEVEL_DEFINITION`] are executed. Tests and the `debug-checks` feature run
//! all of them.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CAGEY_ASSERT_LEVEL_DEFINITION: u8 = CAGEY_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CAGEY_ASSERT_LEVEL_DEFINITION: u8 = CAGEY_ASSERT_EXTREME;

pub const CAGEY_ASSERT_SIMPLE: u8 = 1;
pub const CAGEY_ASSERT_MODERATE: u8 = 2;
pub const CAGEY_ASSERT_ADVANCED: u8 = 3;
pub const CAGEY_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_cagey_assert_warning_message {
    () => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the Cagey assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cagey_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cagey_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cagey_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cagey_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! cagey_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::CAGEY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CAGEY_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
