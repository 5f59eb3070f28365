use admission_bulk_query::cli::Input;
use admission_bulk_query::models::parse_query_records;
use admission_bulk_query::{
    AdmissionLookup, App, BatchDispatcher, Config, LookupClient, LookupError, OutputFormat,
    QueryRecord,
};
use axum::{routing::post, Form, Router};
use serde::Deserialize;
use std::io::Write;
use std::sync::Arc;

/// 假查询接口收到的表单
#[derive(Debug, Deserialize)]
struct AdmissionForm {
    #[serde(rename = "examNo")]
    exam_no: String,
    #[serde(rename = "examinneNo")]
    examinee_no: String,
    #[serde(rename = "examId")]
    exam_id: String,
}

/// 按准考证号返回不同的响应：
/// - 末位 0：查无记录
/// - 末位 9：非 JSON 响应
/// - 其他：一条录取记录，姓名里回显收到的表单值
async fn fake_admission(Form(form): Form<AdmissionForm>) -> String {
    if form.exam_no.ends_with('0') {
        return r#"{"enrollList": null}"#.to_string();
    }
    if form.exam_no.ends_with('9') {
        return "<html>502 Bad Gateway</html>".to_string();
    }
    serde_json::json!({
        "enrollList": [{
            "NAME": format!("{}|{}|{}", form.exam_no, form.examinee_no, form.exam_id),
            "GRADE11": "清华大学",
            "GRADE10": "10003",
            "GRADE8": "本科一批",
            "GRADE13": "计算机科学与技术",
            "GRADE12": "080901"
        }]
    })
    .to_string()
}

/// 启动假查询接口，返回接口地址
async fn spawn_fake_service() -> String {
    let app = Router::new().route("/queryService/rest/admission/110", post(fake_admission));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/queryService/rest/admission/110", addr)
}

fn config_for(endpoint: String) -> Config {
    Config {
        endpoint,
        exam_id: 4865,
        max_concurrent_lookups: 4,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_lookup_sends_padded_form() {
    let endpoint = spawn_fake_service().await;
    let client = LookupClient::new(&config_for(endpoint));

    let result = client.lookup(QueryRecord::new(42, 7)).await.unwrap();

    assert!(!result.is_failed());
    assert_eq!(result.name(), "000000042|00000000000007|4865");
    assert_eq!(result.university(), "清华大学");
    assert_eq!(result.university_no(), 10003);
    assert_eq!(result.university_type(), "本科一批");
    assert_eq!(result.major(), "计算机科学与技术");
    assert_eq!(result.major_no(), 80901);
}

#[tokio::test]
async fn test_lookup_without_record_is_failed() {
    let endpoint = spawn_fake_service().await;
    let client = LookupClient::new(&config_for(endpoint));

    let result = client.lookup(QueryRecord::new(10, 1)).await.unwrap();

    assert!(result.is_failed());
    assert!(result.is_blank());
}

#[tokio::test]
async fn test_lookup_non_json_is_fatal() {
    let endpoint = spawn_fake_service().await;
    let client = LookupClient::new(&config_for(endpoint));

    let err = client.lookup(QueryRecord::new(19, 1)).await.unwrap_err();

    assert!(matches!(err, LookupError::Envelope { .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_fatal() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LookupClient::new(&config_for(format!("http://{}/admission", addr)));
    let err = client.lookup(QueryRecord::new(1, 1)).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport { .. }));
}

#[tokio::test]
async fn test_batch_against_fake_service() {
    let endpoint = spawn_fake_service().await;
    let config = config_for(endpoint);
    let dispatcher = BatchDispatcher::from_config(Arc::new(LookupClient::new(&config)), &config);

    let records = parse_query_records(
        "100000001,20000000000001\n\
         100000010,20000000000002\n\
         not,a,record\n\
         100000003,20000000000003\n\
         100000020,20000000000004\n\
         100000005,20000000000005\n",
    );
    assert_eq!(records.len(), 5);

    let results = dispatcher.dispatch(records.clone()).await.unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results.iter().filter(|r| r.is_failed()).count(), 2);
    for record in &records {
        let result = results
            .iter()
            .find(|r| r.query() == record)
            .expect("每个考生都应有结果");
        assert_eq!(result.is_failed(), record.exam_no % 10 == 0);
    }
}

#[tokio::test]
async fn test_batch_aborts_on_bad_envelope() {
    let endpoint = spawn_fake_service().await;
    let config = config_for(endpoint);
    let dispatcher = BatchDispatcher::from_config(Arc::new(LookupClient::new(&config)), &config);

    let records = vec![
        QueryRecord::new(1, 1),
        QueryRecord::new(9, 2),
        QueryRecord::new(3, 3),
    ];

    assert!(dispatcher.dispatch(records).await.is_err());
}

#[tokio::test]
async fn test_app_writes_table_from_file() {
    let endpoint = spawn_fake_service().await;
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "1,11\n\nbad\n20,22,extra\n").unwrap();

    let app = App::initialize(config_for(endpoint), OutputFormat::Table).unwrap();
    let mut out = Vec::new();
    let results = app
        .run(Input::File(file.path().to_path_buf()), &mut out)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("姓名,准考证号,考生号"));
    assert_eq!(lines.iter().filter(|l| l.ends_with(",失败")).count(), 1);
    assert_eq!(lines.iter().filter(|l| l.ends_with(",成功")).count(), 1);
}

#[tokio::test]
async fn test_app_table_header_without_valid_records() {
    let endpoint = spawn_fake_service().await;
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "bad\n\nstill,bad\n").unwrap();

    let app = App::initialize(config_for(endpoint), OutputFormat::Table).unwrap();
    let mut out = Vec::new();
    let results = app
        .run(Input::File(file.path().to_path_buf()), &mut out)
        .await
        .unwrap();

    assert!(results.is_empty());
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["姓名,准考证号,考生号,大学类型,大学名称,大学代码,专业名称,专业代码,查询状态"]
    );
}

#[tokio::test]
async fn test_app_blocks_empty_without_valid_records() {
    let endpoint = spawn_fake_service().await;
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "bad\n").unwrap();

    let app = App::initialize(config_for(endpoint), OutputFormat::Blocks).unwrap();
    let mut out = Vec::new();
    app.run(Input::File(file.path().to_path_buf()), &mut out)
        .await
        .unwrap();

    assert!(out.is_empty());
}

#[tokio::test]
async fn test_app_fatal_error_writes_nothing() {
    let endpoint = spawn_fake_service().await;
    let app = App::initialize(config_for(endpoint), OutputFormat::Blocks).unwrap();

    let mut out = Vec::new();
    let outcome = app
        .run(Input::Single(QueryRecord::new(99, 1)), &mut out)
        .await;

    assert!(outcome.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_live_service_single_examinee() {
    let _ = tracing_subscriber::fmt::try_init();

    let app = App::initialize(Config::from_env(), OutputFormat::Blocks).expect("初始化失败");
    let mut out = Vec::new();
    let results = app
        .run(
            Input::Single(QueryRecord::new(123456789, 12345678901234)),
            &mut out,
        )
        .await
        .expect("查询失败");

    assert_eq!(results.len(), 1);
    println!("{}", String::from_utf8_lossy(&out));
}
