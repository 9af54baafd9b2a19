//! Helper macro for declaring repository error enums.

/// Declare a repository error enum where every variant carries one string
/// field, together with a snake_case constructor per variant.
///
/// Both repository ports report the same shape of failure (connection,
/// query, one uniqueness clash), and their adapters build them from `&str`
/// and `String` alike; the constructors take `impl Into<String>` so call
/// sites such as `DocumentRepositoryError::duplicate_title(title)` stay
/// short.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident : String } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $field: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
