//! Macros for reducing boilerplate when defining typed records
//!
//! A typed record is a plain struct whose fields map one to one onto the
//! JSON keys of the fixture files. The macro below generates the struct,
//! its serde attributes and the [`Record`](crate::core::record::Record)
//! implementation that reads a field by its JSON key.

/// Complete macro to create a typed record with automatic trait implementations
///
/// Each field is declared as `"jsonKey" => rust_name: Type`. Every type must
/// implement `Default`, `Clone` and `Into<FieldValue>`; missing keys in the
/// input deserialize to the default.
///
/// # Example
///
/// ```rust,ignore
/// use aerostaff::prelude::*;
///
/// impl_record!(
///     /// A crew member
///     CrewMember {
///         "nomComplet" => nom_complet: String,
///         "dateInscription" => date_inscription: Option<String>,
///         "heuresVol" => heures_vol: Option<i64>,
///     }
/// );
///
/// let crew = CrewMember::default();
/// assert_eq!(CrewMember::FIELDS, &["nomComplet", "dateInscription", "heuresVol"]);
/// assert_eq!(crew.field_value("heuresVol"), Some(FieldValue::Null));
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$meta:meta])*
        $type:ident {
            $( $key:literal => $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            $(
                #[serde(rename = $key, default)]
                pub $field: $field_type,
            )*
        }

        impl $type {
            /// JSON keys of every field, in declaration order
            pub const FIELDS: &'static [&'static str] = &[ $( $key ),* ];
        }

        impl $crate::core::record::Record for $type {
            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    $(
                        $key => Some($crate::core::field::FieldValue::from(self.$field.clone())),
                    )*
                    _ => None,
                }
            }
        }
    };
}
