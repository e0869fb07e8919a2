//! Behaviour tests for concurrent sessions and listener lifecycle.

use super::support::{Client, start_server};

#[test]
fn concurrent_sessions_are_isolated() {
    let (server, addr) = start_server(4);
    let mut clients: Vec<Client> = (0..4).map(|_| Client::connect(addr)).collect();
    for client in &mut clients {
        client.expect_greeting();
    }

    // Interleave distinct commands across the connections.
    let requests = [
        (r#"{"command":"getTeams"}"#, r#"{"teams":"#),
        (r#"{"command":"getSchedule"}"#, r#"{"schedule":"#),
        (
            r#"{"command":"getPlayer","name":"Rohit"}"#,
            r#"{"player":"Rohit Sharma"#,
        ),
        (r#"{"command":"nonsense"}"#, r#"{"error":"Unknown command"}"#),
    ];
    for (client, (request, _)) in clients.iter_mut().zip(&requests) {
        client.send_line(request);
    }
    for (client, (_, expected_prefix)) in clients.iter_mut().zip(&requests) {
        let reply = client.read_reply().expect("reply before close");
        assert!(
            reply.starts_with(expected_prefix),
            "unexpected reply: {reply}"
        );
    }

    for client in &mut clients {
        client.send_line(r#"{"command":"exit"}"#);
    }
    server.shutdown();
    server.join().expect("join server");
}

#[test]
fn saturated_pool_delays_sessions_instead_of_dropping_them() {
    let (server, addr) = start_server(1);
    let mut first = Client::connect(addr);
    first.expect_greeting();

    // The only worker is owned by the first session, so this connection is
    // accepted but waits for a slot.
    let mut second = Client::connect(addr);

    assert_eq!(
        first.request(r#"{"command":"exit"}"#),
        r#"{"message":"Goodbye!"}"#
    );

    // The freed slot picks the waiting connection up.
    second.expect_greeting();
    assert_eq!(
        second.request(r#"{"command":"exit"}"#),
        r#"{"message":"Goodbye!"}"#
    );
    server.shutdown();
    server.join().expect("join server");
}

#[test]
fn shutdown_leaves_running_sessions_undisturbed() {
    let (server, addr) = start_server(2);
    let mut client = Client::connect(addr);
    client.expect_greeting();

    server.shutdown();
    server.shutdown();

    // The in-flight session keeps its request/reply pipeline.
    assert_eq!(
        client.request(r#"{"command":"getPlayer","name":"Dhoni"}"#),
        r#"{"player":"MS Dhoni - CSK Captain, Wicketkeeper"}"#
    );
    assert_eq!(
        client.request(r#"{"command":"exit"}"#),
        r#"{"message":"Goodbye!"}"#
    );
    server.join().expect("join server");
}
