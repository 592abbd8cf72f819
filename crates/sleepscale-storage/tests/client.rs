use sleepscale_storage::client::build_client;

#[tokio::test]
async fn region_override_wins_over_the_default_chain() {
    let client = build_client(Some("ap-east-1")).await;
    assert_eq!(
        client.config().region().map(|r| r.as_ref()),
        Some("ap-east-1")
    );
}
