//! Common test utilities for building journeys, registries and sessions.
use keiro::prelude::*;

/// Properties every test journey carries.
#[allow(dead_code)]
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property::new("userId", PropertyType::Number),
        Property::new("sessionToken", PropertyType::String),
        Property::new("signupDate", PropertyType::Date),
    ]
}

#[allow(dead_code)]
pub fn sample_registry() -> PropertyRegistry {
    PropertyRegistry::new(sample_properties())
}

/// Looks up the generated id of a property by key.
#[allow(dead_code)]
pub fn property_id(registry: &PropertyRegistry, key: &str) -> PropertyId {
    registry
        .lookup_by_key(key)
        .expect("sample property should exist")
        .id
        .clone()
}

#[allow(dead_code)]
pub fn sample_journey() -> Journey {
    let mut journey = Journey::new("Onboarding", "New user signup flow");
    journey.properties = sample_properties();
    journey
}

/// Drives a full editing session and commits one POST function with a
/// request-body binding to `userId`. Returns the committed id.
#[allow(dead_code)]
pub fn commit_sample_function(
    registry: &PropertyRegistry,
    store: &mut FunctionStore,
) -> FunctionId {
    let mut session = DraftSession::start_new();
    session.set_name("Create user");
    session.set_kind(FunctionType::Api);
    session.set_host("https://api.example.com");
    session.set_path("/api/v1/users");
    session.set_method(Method::Post);

    let row = session.add_body_field();
    session.set_body_api_field(registry, &row, "user_id");
    session.bind_body_property(registry, &row, "userId");

    session.submit(store).expect("sample submit should succeed")
}
