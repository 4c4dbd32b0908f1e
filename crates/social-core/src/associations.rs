//! Static description of the relational schema.
//!
//! Every association between the five entities is declared here once, with
//! its cardinality and the side that owns the link. Storage backends mirror
//! this table; it is also what callers inspect to learn how records connect.

use std::fmt;

/// The five persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Profile,
    Post,
    Comment,
    Like,
}

impl EntityKind {
    /// All kinds in dependency order: a kind never references a later one.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::User,
        EntityKind::Profile,
        EntityKind::Post,
        EntityKind::Comment,
        EntityKind::Like,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Profile => "profiles",
            EntityKind::Post => "posts",
            EntityKind::Comment => "comments",
            EntityKind::Like => "likes",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Profile => "Profile",
            EntityKind::Post => "Post",
            EntityKind::Comment => "Comment",
            EntityKind::Like => "Like",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

/// Auxiliary table realizing a many-to-many association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTable {
    pub name: &'static str,
    /// Foreign key column referencing the association's source.
    pub left: &'static str,
    /// Foreign key column referencing the association's target.
    pub right: &'static str,
    /// Whether a (left, right) pair may appear at most once.
    pub unique_pairs: bool,
}

/// How an association is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// `owner` carries a nullable column referencing the other side.
    ForeignKey {
        owner: EntityKind,
        column: &'static str,
    },
    Join(JoinTable),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Association {
    pub name: &'static str,
    pub source: EntityKind,
    pub target: EntityKind,
    pub cardinality: Cardinality,
    pub link: Link,
}

impl Association {
    /// True when `kind` sits on either end of this association.
    pub fn involves(&self, kind: EntityKind) -> bool {
        self.source == kind || self.target == kind
    }
}

pub const USER_LIKE: JoinTable = JoinTable {
    name: "user_like",
    left: "user_id",
    right: "like_id",
    unique_pairs: true,
};

pub const ASSOCIATIONS: &[Association] = &[
    Association {
        name: "profile",
        source: EntityKind::User,
        target: EntityKind::Profile,
        cardinality: Cardinality::OneToOne,
        link: Link::ForeignKey {
            owner: EntityKind::Profile,
            column: "user_id",
        },
    },
    Association {
        name: "posts",
        source: EntityKind::User,
        target: EntityKind::Post,
        cardinality: Cardinality::OneToMany,
        link: Link::ForeignKey {
            owner: EntityKind::Post,
            column: "user_id",
        },
    },
    Association {
        name: "comments",
        source: EntityKind::Post,
        target: EntityKind::Comment,
        cardinality: Cardinality::OneToMany,
        link: Link::ForeignKey {
            owner: EntityKind::Comment,
            column: "post_id",
        },
    },
    Association {
        name: "likes",
        source: EntityKind::User,
        target: EntityKind::Like,
        cardinality: Cardinality::ManyToMany,
        link: Link::Join(USER_LIKE),
    },
];

/// Look up the association declared between two kinds, in either direction.
pub fn between(a: EntityKind, b: EntityKind) -> Option<&'static Association> {
    ASSOCIATIONS
        .iter()
        .find(|assoc| assoc.involves(a) && assoc.involves(b) && a != b)
}
