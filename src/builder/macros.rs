//! Macros for declaring phase enums.

/// Declare a unit enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as the state names; `final:` and `error:` list the
/// terminal and failure variants.
///
/// # Example
///
/// ```
/// use trajectory_capture::state_enum;
/// use trajectory_capture::core::State;
///
/// state_enum! {
///     pub enum ExportPhase {
///         Pending,
///         Writing,
///         Done,
///         Failed,
///     }
///     final: [Done, Failed]
///     error: [Failed]
/// }
///
/// assert_eq!(ExportPhase::Writing.name(), "Writing");
/// assert!(ExportPhase::Failed.is_error());
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Upload {
            Queued,
            Sending,
            Sent,
            Rejected,
        }
        final: [Sent, Rejected]
        error: [Rejected]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Upload::Queued.name(), "Queued");
        assert!(!Upload::Sending.is_final());
        assert!(Upload::Sent.is_final());
        assert!(!Upload::Sent.is_error());
        assert!(Upload::Rejected.is_error());
    }

    #[test]
    fn state_enum_implements_display() {
        assert_eq!(Upload::Sending.to_string(), "Sending");
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum Toggle {
                Up,
                Down,
            }
        }

        assert!(!Toggle::Up.is_final());
        assert!(!Toggle::Down.is_error());
    }
}
