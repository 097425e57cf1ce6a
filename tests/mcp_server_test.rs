use httpmock::prelude::*;
use listennotes_mcp::{ApiConfig, McpServer, ServerInfo, ToolRegistry};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

fn server_for(base_url: String) -> Arc<McpServer> {
    let registry = ToolRegistry::from_config(&ApiConfig::new(base_url).with_api_key("k")).unwrap();
    Arc::new(McpServer::new(Arc::new(registry), ServerInfo::default()))
}

/// 透過 in-memory duplex stream 走完整個 MCP 流程
#[tokio::test]
async fn test_stdio_session_end_to_end() {
    let mock = MockServer::start_async().await;
    let genres = mock
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v2/genres")
                .query_param("top_level_only", "1")
                .header("X-ListenAPI-Key", "k");
            then.status(200)
                .json_body(json!({"genres": [{"id": 144, "name": "Personal Finance", "parent_id": 67}]}));
        })
        .await;

    let server = server_for(mock.url("/api/v2"));
    let (client_side, server_side) = tokio::io::duplex(1 << 20);
    let (server_read, server_write) = tokio::io::split(server_side);
    let serving = tokio::spawn(server.serve(BufReader::new(server_read), server_write));

    let (client_read, mut client_write) = tokio::io::split(client_side);
    let requests = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {"protocolVersion": "2024-11-05"}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
               "params": {"name": "get_genres", "arguments": {"top_level_only": 1}}}),
        json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
               "params": {"name": "get_search", "arguments": {}}}),
    ];
    for request in &requests {
        let mut line = serde_json::to_vec(request).unwrap();
        line.push(b'\n');
        client_write.write_all(&line).await.unwrap();
    }
    client_write.write_all(b"this is not json\n").await.unwrap();

    // 回應順序不固定，依 id 收集；parse error 的 id 是 null
    let mut responses: HashMap<String, Value> = HashMap::new();
    let mut lines = BufReader::new(client_read).lines();
    while responses.len() < 5 {
        let line = lines.next_line().await.unwrap().expect("server closed early");
        let response: Value = serde_json::from_str(&line).unwrap();
        responses.insert(response["id"].to_string(), response);
    }

    client_write.shutdown().await.unwrap();
    serving.await.unwrap().unwrap();

    let init = &responses["1"];
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(init["result"]["serverInfo"]["name"], "listennotes-mcp");

    let tools = responses["2"]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 21);
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));

    let call = &responses["3"]["result"];
    assert_eq!(call["isError"], false);
    let text: Value = serde_json::from_str(call["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text["genres"][0]["name"], "Personal Finance");
    genres.assert_async().await;

    let failed = &responses["4"]["result"];
    assert_eq!(failed["isError"], true);
    assert_eq!(failed["content"][0]["text"], "Missing required parameter: q");

    assert_eq!(responses["null"]["error"]["code"], -32700);
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() {
    let server = server_for("http://127.0.0.1:9/api/v2".to_string());
    let line = r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"get_everything"}}"#;
    let response = server.handle_message(line).await.unwrap();
    let response = serde_json::to_value(response).unwrap();
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Unknown tool: get_everything");
}

#[tokio::test]
async fn test_server_stops_at_end_of_input() {
    let server = server_for("http://127.0.0.1:9/api/v2".to_string());
    let input = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n\n" as &[u8];
    let (writer, reader) = tokio::io::duplex(4096);

    server.serve(BufReader::new(input), writer).await.unwrap();

    let mut lines = BufReader::new(reader).lines();
    let line = lines.next_line().await.unwrap().unwrap();
    let response: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(response, json!({"jsonrpc": "2.0", "result": {}, "id": 1}));
}
