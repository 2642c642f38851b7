// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    // Display rendering of the final container, e.g. `[a, b]`
    ([$($attrs:meta)*] rendered, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_rendered() {
            let result = input().map(|container| container.to_string());
            assert_case!(result, $expected);
        }
    };

    // Same as `rendered`, checked against an `expect![[...]]` snapshot
    ([$($attrs:meta)*] snapshot, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_snapshot() {
            let rendered = match input() {
                Ok(container) => container.to_string(),
                Err(err) => panic!("Expected a container but got {:?}", err),
            };
            let expected = $expected;
            expected.assert_eq(&rendered);
        }
    };

    ([$($attrs:meta)*] len, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_len() {
            let result = input().map(|container| container.len());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] capacity, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_capacity() {
            let result = input().map(|container| container.capacity());
            assert_case!(result, $expected);
        }
    };

    // Elements in order, read back one at a time through `get`
    ([$($attrs:meta)*] elements, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_elements() {
            let result = input().and_then(|container| {
                let mut elements = Vec::new();
                for i in 0..container.len() {
                    elements.push(container.get(i)?.clone());
                }
                Ok(elements)
            });
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] error, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error() {
            let err = match input() {
                Err(e) => e,
                Ok(container) => panic!("Expected an error, but got {}", container),
            };
            let result: Result<String, ()> = Ok(err.to_string());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields (now correctly capturing braces)
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes (handles both cases)
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions.
//
// `input` is a block that builds a container and may use `?` on any
// container operation; every assertion runs it afresh.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:block,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code, unused_mut)]

            use super::*;

            fn input() -> Result<Container<Value>, ContainerError> $input

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
