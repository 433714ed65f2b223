//! Data models for the engg.pk content verticals.
//!
//! These models match the frontend TypeScript interfaces exactly so fixture documents
//! written for the web client load unchanged.

/// Declares a closed string enumeration whose wire form is its display label.
macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every wire label, in declaration order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod career;
mod forum;
mod insight;
mod job;
mod scholarship;
mod startup;
mod store;
mod subject;
mod university;
mod user;

pub use career::*;
pub use forum::*;
pub use insight::*;
pub use job::*;
pub use scholarship::*;
pub use startup::*;
pub use store::*;
pub use subject::*;
pub use university::*;
pub use user::*;

/// A record that can be listed, looked up by id and shown in a detail view.
pub trait Record {
    /// Stable identifier, unique within its collection.
    fn id(&self) -> &str;

    /// Heading shown for the record.
    fn display_title(&self) -> String;

    /// Main body text, used for the detail page meta description.
    fn lead_text(&self) -> &str;
}
