//! Records exchanged with the accommodation API.
//!
//! Every list model implements [`hospitality_seeker::Record`] so screens can
//! search and filter it.

/// Declares a closed set of string labels with their wire names.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire and display label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Every label, in declaration order.
            pub fn labels() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|v| v.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        format!(
                            "unknown {} `{}` (expected one of: {})",
                            stringify!($name),
                            s,
                            Self::labels().collect::<Vec<_>>().join(", ")
                        )
                    })
            }
        }
    };
}

mod allotment;
mod analytics;
mod hostel;
mod logs;
mod registrant;
mod user;

pub use allotment::PendingAllotment;
pub use analytics::{CampusCounts, HostelStats, InsideCampusSummary, LiveBedsSummary};
pub use hostel::Hostel;
pub use logs::{Direction, GateLog, HostelLog};
pub use registrant::{CheckInStatus, Gender, HostelCode, PaymentStatus, Registrant};
pub use user::{Credentials, User};
