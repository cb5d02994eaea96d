//! Helper macro for generating domain port error enums.

/// Generate a port error enum plus snake_case constructors.
///
/// Every variant carries named fields; constructors accept `impl Into<T>`
/// for each field so call sites can pass string literals directly.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ExamplePortError {
            Connection { message: String } => "connection: {message}",
            Query { message: String, code: u32 } => "query {code}: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::connection("refused");
        assert_eq!(err.to_string(), "connection: refused");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::query("boom", 7_u32);
        assert_eq!(err.to_string(), "query 7: boom");
    }

    #[test]
    fn variants_compare_by_payload() {
        assert_eq!(
            ExamplePortError::connection("down"),
            ExamplePortError::Connection {
                message: "down".into()
            }
        );
    }
}
