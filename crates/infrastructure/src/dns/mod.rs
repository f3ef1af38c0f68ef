pub mod resolver;
pub mod transport;
pub mod wire;

pub use resolver::WireResolver;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::query::{EncodedQuery, QueryEncoder};
pub use wire::decode_response;
