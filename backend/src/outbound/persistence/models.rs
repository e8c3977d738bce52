//! Internal Diesel row structs and their mapping to domain entities.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. Mapping is deliberately lenient: a row
//! failing required-field validation maps to `None` and is filtered out of
//! listings, so malformed legacy rows do not break reads.

use diesel::prelude::*;

use crate::domain::{Address, Post, User};

use super::schema::{posts, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    #[diesel(column_name = seq)]
    pub _seq: i64,
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

impl UserRow {
    /// Map a row to its entity, dropping rows with a missing name or email.
    ///
    /// Address components are optional independently of each other: when at
    /// least one is present the address is emitted with absent components
    /// as empty strings; when all four are absent the address is `None`.
    pub(crate) fn into_user(self) -> Option<User> {
        let name = self.name?;
        let email = self.email?;
        let address = match (self.street, self.city, self.state, self.zipcode) {
            (None, None, None, None) => None,
            (street, city, state, zipcode) => Some(Address {
                street: street.unwrap_or_default(),
                city: city.unwrap_or_default(),
                state: state.unwrap_or_default(),
                zipcode: zipcode.unwrap_or_default(),
            }),
        };
        Some(User {
            id: self.id,
            name,
            email,
            address,
        })
    }
}

/// Insertable struct for seeding user records.
///
/// Users have no write endpoint, so this is only exercised by the
/// test-support seeding helpers.
#[cfg(feature = "test-support")]
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub zipcode: Option<&'a str>,
}

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PostRow {
    #[diesel(column_name = seq)]
    pub _seq: i64,
    pub id: String,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostRow {
    /// Map a row to its entity, dropping rows with any required field NULL.
    pub(crate) fn into_post(self) -> Option<Post> {
        Some(Post {
            id: self.id,
            user_id: self.user_id?,
            title: self.title?,
            body: self.body?,
        })
    }
}

/// Insertable struct for creating new post records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub id: &'a str,
    pub user_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub body: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row() -> UserRow {
        UserRow {
            _seq: 1,
            id: "u1".into(),
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            street: Some("12 Crescent".into()),
            city: Some("London".into()),
            state: Some("LDN".into()),
            zipcode: Some("N1".into()),
        }
    }

    #[test]
    fn complete_user_row_maps_to_entity() {
        let user = user_row().into_user().expect("row maps");
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ada");
        let address = user.address.expect("address present");
        assert_eq!(address.city, "London");
    }

    #[test]
    fn user_row_missing_name_is_dropped() {
        let row = UserRow {
            name: None,
            ..user_row()
        };
        assert!(row.into_user().is_none());
    }

    #[test]
    fn user_row_missing_email_is_dropped() {
        let row = UserRow {
            email: None,
            ..user_row()
        };
        assert!(row.into_user().is_none());
    }

    #[test]
    fn user_row_without_any_address_component_maps_to_null_address() {
        let row = UserRow {
            street: None,
            city: None,
            state: None,
            zipcode: None,
            ..user_row()
        };
        let user = row.into_user().expect("row maps");
        assert!(user.address.is_none());
    }

    #[test]
    fn partial_address_components_coalesce_to_empty_strings() {
        let row = UserRow {
            street: None,
            zipcode: None,
            ..user_row()
        };
        let address = row.into_user().and_then(|u| u.address).expect("address");
        assert_eq!(address.street, "");
        assert_eq!(address.city, "London");
        assert_eq!(address.zipcode, "");
    }

    #[test]
    fn post_row_with_any_required_field_missing_is_dropped() {
        let complete = PostRow {
            _seq: 1,
            id: "p1".into(),
            user_id: Some("u1".into()),
            title: Some("T".into()),
            body: Some("B".into()),
        };
        assert!(complete.clone().into_post().is_some());

        for row in [
            PostRow {
                user_id: None,
                ..complete.clone()
            },
            PostRow {
                title: None,
                ..complete.clone()
            },
            PostRow {
                body: None,
                ..complete
            },
        ] {
            assert!(row.into_post().is_none());
        }
    }
}
