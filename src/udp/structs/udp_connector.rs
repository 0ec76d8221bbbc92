/// Resolves tracker hosts and opens [`UdpTransport`](crate::udp::structs::udp_transport::UdpTransport)s.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpConnector;
