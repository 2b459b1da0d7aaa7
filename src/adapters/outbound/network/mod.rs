/// Network adapters for fetching feed resources
mod feed_client;

pub use feed_client::PhotonFeedClient;
