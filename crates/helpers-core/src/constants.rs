/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const IDS_ROUTE_COMPONENT: &str = "ids";
pub const IDS_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", IDS_ROUTE_COMPONENT);

pub const PASSWORDS_ROUTE_COMPONENT: &str = "passwords";
pub const PASSWORDS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", PASSWORDS_ROUTE_COMPONENT);

/// Media types understood by the response writers
pub const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";
