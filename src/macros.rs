/// Declares an enum whose variants are named by string literals, with a
/// `from_str` that maps the literal back to the variant
#[macro_export]
macro_rules! config_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $val:literal
            ),*,
            }
    ) => {
        $(#[$attr])*
        $vis enum $name {
            $(
                $(#[$doc])*
                $variant
            ),*,
        }

        impl $name {
            pub fn from_str(s: &str) -> Result<Self, $crate::error::ConfigError> {
                Ok(match s {
                    $($val => Self::$variant),*,
                    _ => return Err($crate::error::ConfigError::UnrecognizedVariant {
                        ty: stringify!($name),
                        found: s.to_owned(),
                    })
                })
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $val),*,
                }
            }
        }
    };
}
