use common::model::entity::{EntityKind, EntityReference};
use common::model::query::Construct;
use url::Url;

use super::error::ServiceError;

/// URL builder for the Query Service routes. Entity names are pushed as path
/// segments so they are percent-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, ServiceError> {
        let base = Url::parse(base).map_err(|_| ServiceError::InvalidUrl(base.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base.to_string()));
        }
        Ok(Self { base })
    }

    fn build(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    pub fn catalog(&self, kind: EntityKind) -> String {
        match kind {
            EntityKind::Table => self.build(&["mysql", "tables"]),
            EntityKind::Collection => self.build(&["mongo", "collections"]),
        }
    }

    pub fn details(&self, entity: &EntityReference) -> String {
        let resource = match entity.kind {
            EntityKind::Table => "table",
            EntityKind::Collection => "collection",
        };
        self.build(&[entity.kind.path_prefix(), resource, &entity.name])
    }

    pub fn sample_queries(&self, entity: &EntityReference) -> String {
        self.build(&[entity.kind.path_prefix(), "sample-queries", &entity.name])
    }

    pub fn construct_queries(&self, entity: &EntityReference, construct: Construct) -> String {
        self.build(&[
            entity.kind.path_prefix(),
            "sample-queries",
            &entity.name,
            construct.tag(),
        ])
    }

    pub fn translate(&self) -> String {
        self.build(&["nlp-query"])
    }

    pub fn upload(&self) -> String {
        self.build(&["upload-dataset"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://localhost:5001").unwrap()
    }

    #[test]
    fn catalog_routes_per_kind() {
        let e = endpoints();
        assert_eq!(e.catalog(EntityKind::Table), "http://localhost:5001/mysql/tables");
        assert_eq!(
            e.catalog(EntityKind::Collection),
            "http://localhost:5001/mongo/collections"
        );
    }

    #[test]
    fn entity_routes_use_kind_prefix() {
        let e = endpoints();
        assert_eq!(
            e.details(&EntityReference::table("orders")),
            "http://localhost:5001/mysql/table/orders"
        );
        assert_eq!(
            e.details(&EntityReference::collection("reviews")),
            "http://localhost:5001/mongo/collection/reviews"
        );
        assert_eq!(
            e.sample_queries(&EntityReference::collection("reviews")),
            "http://localhost:5001/mongo/sample-queries/reviews"
        );
        assert_eq!(
            e.construct_queries(&EntityReference::table("orders"), Construct::GroupBy),
            "http://localhost:5001/mysql/sample-queries/orders/group_by"
        );
    }

    #[test]
    fn names_are_percent_encoded() {
        assert_eq!(
            endpoints().details(&EntityReference::table("order items/2024")),
            "http://localhost:5001/mysql/table/order%20items%2F2024"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let e = Endpoints::new("https://example.test/api/").unwrap();
        assert_eq!(e.translate(), "https://example.test/api/nlp-query");
        assert_eq!(e.upload(), "https://example.test/api/upload-dataset");
    }

    #[test]
    fn unusable_base_is_rejected() {
        assert!(matches!(
            Endpoints::new("not a url"),
            Err(ServiceError::InvalidUrl(_))
        ));
        assert!(matches!(
            Endpoints::new("mailto:someone@example.test"),
            Err(ServiceError::InvalidUrl(_))
        ));
    }
}
