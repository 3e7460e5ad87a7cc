//! Closed value sets stored as text columns.
//!
//! Each enum round-trips the exact stored text through `as_str` and serde.
//! Parsing from a column is lenient: text outside the set resolves to the
//! column default, the same value a NULL column resolves to.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stored_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
        $( aliases { $( $alias:literal => $target:ident ),+ $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// All values in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The stored text for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            /// Resolve a nullable column, applying the column default.
            #[must_use]
            pub fn from_column(value: Option<&str>) -> Self {
                value.map(Self::from).unwrap_or_default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $text => Self::$variant, )+
                    $( $( $alias => Self::$target, )+ )?
                    _ => Self::$default,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// AI
// ============================================================================

stored_enum! {
    /// Lifecycle of an AI conversation
    pub enum ConversationStatus default Active {
        Active = "active",
        Completed = "completed",
        Abandoned = "abandoned",
        Archived = "archived",
    }
}

stored_enum! {
    /// Author of an AI message. The column is non-null; unknown text reads as `user`.
    pub enum MessageRole default User {
        User = "user",
        Assistant = "assistant",
        System = "system",
    }
}

stored_enum! {
    /// Processing status of a background AI content job
    pub enum JobStatus default Pending {
        Pending = "pending",
        Processing = "processing",
        Completed = "completed",
        Failed = "failed",
        Cancelled = "cancelled",
    }
}

stored_enum! {
    /// Scheduling priority of a background AI content job
    pub enum JobPriority default Normal {
        Low = "low",
        Normal = "normal",
        High = "high",
        Urgent = "urgent",
    }
}

impl JobPriority {
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

stored_enum! {
    /// Review status of an AI cross-reference suggestion
    pub enum SuggestionStatus default Pending {
        Pending = "pending",
        Approved = "approved",
        Rejected = "rejected",
        Implemented = "implemented",
    }
}

// ============================================================================
// Assessments
// ============================================================================

stored_enum! {
    /// Publication status of an assessment definition
    pub enum AssessmentStatus default Draft {
        Draft = "draft",
        Active = "active",
        Archived = "archived",
        UnderReview = "under_review",
    }
}

// ============================================================================
// Content
// ============================================================================

stored_enum! {
    /// Editorial status of a content item or series
    pub enum ContentStatus default Draft {
        Draft = "draft",
        Published = "published",
        Archived = "archived",
        UnderReview = "under_review",
        Scheduled = "scheduled",
    }
}

stored_enum! {
    /// Access level of a content item or series.
    ///
    /// The legacy stored value `invite_only` reads as `private`.
    pub enum Visibility default Public {
        Public = "public",
        Premium = "premium",
        Vip = "vip",
        #[serde(alias = "invite_only")]
        Private = "private",
        Organization = "organization",
    }
    aliases { "invite_only" => Private }
}

// ============================================================================
// Organizations
// ============================================================================

stored_enum! {
    /// Account status of an organization
    pub enum OrganizationStatus default Trial {
        Active = "active",
        Inactive = "inactive",
        Trial = "trial",
        Suspended = "suspended",
    }
}

stored_enum! {
    /// Seat licensing model of an organization
    pub enum LicenseType default Individual {
        Individual = "individual",
        Institutional = "institutional",
        Enterprise = "enterprise",
    }
}

stored_enum! {
    /// Status of a user's membership in an organization
    pub enum MembershipStatus default Pending {
        Active = "active",
        Inactive = "inactive",
        Pending = "pending",
        Invited = "invited",
    }
}

stored_enum! {
    /// Role of a member within an organization. The column is non-null; unknown text reads as `member`.
    pub enum MembershipRole default Member {
        Owner = "owner",
        Admin = "admin",
        Member = "member",
        Viewer = "viewer",
    }
}

impl MembershipRole {
    /// Owners and admins can manage the organization.
    #[must_use]
    pub const fn can_manage(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}
