//! Receiving messages through the listener.
#![cfg(feature = "net")]

use std::net::Ipv4Addr;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

use mdns_decode::net::{Config, Listener};
use mdns_decode::{DecodeError, Rtype};

static QUERY: &[u8] = b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
    \x05_http\x04_tcp\x05local\x00\x00\x0c\x00\x01";

async fn loopback_listener() -> (Listener, UdpSocket) {
    let sock = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let listener = Listener::from_socket(sock, Config::new());
    let sender = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    sender
        .connect(listener.local_addr().unwrap())
        .await
        .unwrap();
    (listener, sender)
}

#[tokio::test]
async fn recv_reports_decode_errors() {
    let (listener, sender) = loopback_listener().await;
    sender.send(b"\x00\x00\x84").await.unwrap();

    let mut buf = vec![0; listener.config().recv_buf_size()];
    let (source, res) = timeout(Duration::from_secs(5), listener.recv(&mut buf))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(source, sender.local_addr().unwrap());
    assert_eq!(res, Err(DecodeError::TooFewBytes(3)));
}

#[tokio::test]
async fn run_skips_bad_datagrams() {
    let (listener, sender) = loopback_listener().await;
    sender.send(b"garbage").await.unwrap();
    sender
        .send(b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\xc0\x0c")
        .await
        .unwrap();
    sender.send(QUERY).await.unwrap();

    let mut received = Vec::new();
    timeout(
        Duration::from_secs(5),
        listener.run(|msg| {
            received.push(msg);
            ControlFlow::Break(())
        }),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(received.len(), 1);
    let msg = &received[0];
    assert_eq!(msg.source(), sender.local_addr().unwrap());
    assert_eq!(msg.questions()[0].qname(), "_http._tcp.local");
    assert_eq!(msg.questions()[0].qtype(), Rtype::PTR);
}
