use serde::Deserialize;

/// Envelope of every Rancher v3 collection endpoint.
#[derive(Debug, Deserialize)]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
