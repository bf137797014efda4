//! Macros for ergonomic state machine construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a literal table.
///
/// States and events keep the order they are written in. A trailing
/// `validation:` entry selects the validation mode.
///
/// # Example
///
/// ```
/// use turnstile::core::Validation;
/// use turnstile::machine_config;
///
/// let config = machine_config! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published", "reject" => "draft" },
///         "published" => {},
///     },
///     validation: Validation::Strict,
/// };
///
/// assert_eq!(config.states.len(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        }
        $(, validation: $validation:expr)?
        $(,)?
    ) => {{
        let config = $crate::core::MachineConfig::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDefinition::new() $( .on($event, $target) )*,
            );
        )*
        $(
            let config = config.with_validation($validation);
        )?
        config
    }};
}

/// Declare a closed vocabulary of state or event names.
///
/// The generated enum converts to its variant name (`name()`, `AsRef<str>`,
/// `Display`, `Into<String>`) and back (`FromStr`), so it can be passed
/// directly to [`StateMachine`](crate::runtime::StateMachine) operations.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("Locked".parse::<Door>().unwrap(), Door::Locked);
/// assert_eq!(Door::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.name()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.name().to_string()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::runtime::MachineError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)*
                    _ => Err($crate::runtime::MachineError::InvalidState(s.to_string())),
                }
            }
        }
    };
}
