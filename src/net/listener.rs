//! Receiving Multicast DNS messages.
//!
//! A [`Listener`] joins the Multicast DNS group on a network interface,
//! receives datagrams, and decodes each of them into a [`Message`].
//! Datagrams that fail to decode are logged and skipped, so a single
//! malformed or hostile packet never ends listening.
//!
//! The decoding itself happens synchronously on the task that receives the
//! datagram. Each datagram is decoded on its own and no state is carried
//! over between them.
use core::ops::ControlFlow;

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tracing::{debug, trace, warn};

use crate::base::message::{Decoder, Message};
use crate::base::wire::DecodeError;
use crate::utils::config::DefMinMax;

/// The IPv4 Multicast DNS group address.
pub const MDNS_GROUP_V4: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);

/// The Multicast DNS port.
pub const MDNS_PORT: u16 = 5353;

/// Limit for the size of the receive buffer.
///
/// The value has to be between 12, the size of the header section, and
/// 65,535, the largest UDP payload. The default value is 9,000 which is the
/// largest Multicast DNS message as per section 17 of [RFC 6762].
///
/// Datagrams longer than the buffer are truncated and will most likely
/// fail to decode.
///
/// [RFC 6762]: https://tools.ietf.org/html/rfc6762#section-17
const RECV_BUF_SIZE: DefMinMax<usize> = DefMinMax::new(9000, 12, 65535);

//----------- Config ---------------------------------------------------------

/// Configuration for a listener.
#[derive(Clone, Debug)]
pub struct Config {
    /// The multicast group to join.
    group: Ipv4Addr,

    /// The port to listen on.
    port: u16,

    /// The address of the interface to join the group on.
    interface: Ipv4Addr,

    /// The size of the receive buffer.
    recv_buf_size: usize,

    /// The decoder for received datagrams.
    decoder: Decoder,
}

impl Config {
    /// Creates a new, default config.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the multicast group to join.
    ///
    /// The default is the Multicast DNS group `224.0.0.251`.
    pub fn set_group(&mut self, group: Ipv4Addr) {
        self.group = group;
    }

    /// Returns the multicast group to join.
    pub fn group(&self) -> Ipv4Addr {
        self.group
    }

    /// Sets the port to listen on.
    ///
    /// The default is the Multicast DNS port 5353.
    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Returns the port to listen on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Sets the address of the interface to join the group on.
    ///
    /// The default is the unspecified address which leaves the choice of
    /// interface to the operating system.
    pub fn set_interface(&mut self, interface: Ipv4Addr) {
        self.interface = interface;
    }

    /// Returns the address of the interface to join the group on.
    pub fn interface(&self) -> Ipv4Addr {
        self.interface
    }

    /// Sets the interface to join the group on by its name.
    ///
    /// The first IPv4 address of the interface is used. Fails with
    /// [`io::ErrorKind::NotFound`] if there is no interface with this name
    /// or if it has no IPv4 address.
    pub fn set_interface_name(&mut self, name: &str) -> io::Result<()> {
        self.interface = interface_v4_addr(name)?;
        Ok(())
    }

    /// Sets the size of the receive buffer.
    ///
    /// The value has to be between 12 and 65,535. Values outside this range
    /// are clamped. The default value is 9,000.
    pub fn set_recv_buf_size(&mut self, value: usize) {
        self.recv_buf_size = RECV_BUF_SIZE.limit(value);
    }

    /// Returns the size of the receive buffer.
    pub fn recv_buf_size(&self) -> usize {
        self.recv_buf_size
    }

    /// Sets the decoder used for received datagrams.
    pub fn set_decoder(&mut self, decoder: Decoder) {
        self.decoder = decoder;
    }

    /// Returns the decoder used for received datagrams.
    pub fn decoder(&self) -> Decoder {
        self.decoder
    }
}

//--- Default

impl Default for Config {
    fn default() -> Self {
        Self {
            group: MDNS_GROUP_V4,
            port: MDNS_PORT,
            interface: Ipv4Addr::UNSPECIFIED,
            recv_buf_size: RECV_BUF_SIZE.default(),
            decoder: Decoder::default(),
        }
    }
}

/// Returns the first IPv4 address of the named interface.
fn interface_v4_addr(name: &str) -> io::Result<Ipv4Addr> {
    if_addrs::get_if_addrs()?
        .into_iter()
        .filter(|iface| iface.name == name)
        .find_map(|iface| match iface.ip() {
            IpAddr::V4(addr) => Some(addr),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no IPv4 address for interface '{}'", name),
            )
        })
}

//------------ Listener ------------------------------------------------------

/// A receiver of Multicast DNS messages.
///
/// The listener is normally created via [`bind`][Self::bind] which sets up
/// a socket that is a member of the configured multicast group. Any other
/// UDP socket can be used via [`from_socket`][Self::from_socket].
#[derive(Debug)]
pub struct Listener {
    /// The socket to receive datagrams from.
    sock: UdpSocket,

    /// The configuration.
    config: Config,
}

impl Listener {
    /// Creates a socket for the configured group and a listener atop it.
    ///
    /// The socket is bound to the configured port on all addresses with
    /// address reuse enabled so that other Multicast DNS software on the
    /// same host keeps working. It then joins the group on the configured
    /// interface.
    ///
    /// This function needs to be called from within a Tokio runtime.
    pub fn bind(config: Config) -> io::Result<Self> {
        let sock = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        sock.set_reuse_address(true)?;
        #[cfg(unix)]
        sock.set_reuse_port(true)?;
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        sock.bind(&addr.into())?;
        sock.join_multicast_v4(&config.group, &config.interface)?;
        sock.set_multicast_loop_v4(true)?;
        sock.set_nonblocking(true)?;
        debug!(
            "joined multicast group {} on interface {}",
            config.group, config.interface
        );
        let sock = UdpSocket::from_std(sock.into())?;
        Ok(Self::from_socket(sock, config))
    }

    /// Creates a listener atop an existing socket.
    ///
    /// The group, port, and interface of the config are ignored.
    pub fn from_socket(sock: UdpSocket, config: Config) -> Self {
        Listener { sock, config }
    }

    /// Returns the local address of the socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.sock.local_addr()
    }

    /// Returns the configuration of the listener.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Receives and decodes a single datagram.
    ///
    /// The datagram is read into `buf`. Returns the address the datagram
    /// was received from and the result of decoding it. Only errors of the
    /// socket itself are returned as the outer error.
    pub async fn recv(
        &self,
        buf: &mut [u8],
    ) -> io::Result<(SocketAddr, Result<Message, DecodeError>)> {
        let (len, source) = self.sock.recv_from(buf).await?;
        trace!("received {} octets from {}", len, source);
        Ok((source, self.config.decoder.decode(&buf[..len], source)))
    }

    /// Receives messages until told to stop.
    ///
    /// Each successfully decoded message is passed to `op`. If it returns
    /// [`ControlFlow::Break`], the method returns. Datagrams that fail to
    /// decode are logged and skipped.
    ///
    /// The method only returns an error if receiving from the socket fails.
    pub async fn run<F>(&self, mut op: F) -> io::Result<()>
    where
        F: FnMut(Message) -> ControlFlow<()>,
    {
        let mut buf = vec![0u8; self.config.recv_buf_size];
        loop {
            let (source, res) = self.recv(&mut buf).await?;
            match res {
                Ok(msg) => {
                    if op(msg).is_break() {
                        return Ok(());
                    }
                }
                Err(err) => {
                    warn!("Failed to decode message from {source}: {err}");
                }
            }
        }
    }
}

//============ Testing =======================================================
