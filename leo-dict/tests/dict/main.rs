use leo_dict::ProxyConfig;
use leo_dict::dict::{Client, Error, TranslatedEntry};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::timeout;

const HAUS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xml>
  <search hitWordCntLeft="2" hitWordCntRight="5" />
  <sectionlist>
    <section sctName="subst">
      <entry>
        <side lang="en"><words><word>house</word></words></side>
        <side lang="de"><words><word>Haus</word></words></side>
      </entry>
      <entry>
        <side lang="en"><words><word>home</word></words></side>
        <side lang="de"><words><word>Haus</word></words></side>
      </entry>
    </section>
  </sectionlist>
</xml>"#;

/// 只处理一个连接的http服务，既可以当作词典服务器，也可以当作http代理
///
/// 返回监听地址，以及收到的请求头
async fn serve_once(status: &'static str, body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        String::from_utf8_lossy(&buf).into_owned()
    });

    (addr, handle)
}

fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or_default()
}

#[tokio::test]
async fn translate_direct() {
    let (addr, server) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    let res = client.translate("ende", "Haus").await.unwrap();
    assert_eq!(
        res,
        vec![
            TranslatedEntry::new("house", "Haus", "en"),
            TranslatedEntry::new("home", "Haus", "en"),
        ]
    );

    let head = server.await.unwrap();
    let line = request_line(&head);
    assert!(
        line.starts_with("GET /dictQuery/m-vocab/ende/query.xml?tolerMode=nof&lp=ende&"),
        "{line}"
    );
    assert!(line.contains("&search=Haus&"), "{line}");
}

#[tokio::test]
async fn query_is_percent_encoded_on_the_wire() {
    let (addr, server) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    client.translate("ende", "Tom & Jerry 100%").await.unwrap();

    let head = server.await.unwrap();
    assert!(
        request_line(&head).contains("&search=Tom%20%26%20Jerry%20100%25&"),
        "{head}"
    );
}

#[tokio::test]
async fn translate_through_proxy() {
    let (addr, proxy) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder()
        .proxy(ProxyConfig::http(format!("http://{addr}")))
        .build();

    let res = client.translate("ende", "Haus").await.unwrap();
    assert_eq!(res.len(), 2);

    // 经过代理时请求行是完整的url
    let head = proxy.await.unwrap();
    assert!(
        request_line(&head).starts_with("GET http://dict.leo.org/dictQuery/m-vocab/ende/query.xml?"),
        "{head}"
    );
}

#[tokio::test]
async fn https_goes_through_https_proxy() {
    // 代理返回502，reqwest建立隧道失败，这里只关心代理收到的CONNECT
    let (addr, proxy) = serve_once("502 Bad Gateway", "").await;
    let client = Client::builder()
        .host("https://dict.leo.org")
        .proxy(ProxyConfig {
            enabled: true,
            http_url: None,
            https_url: Some(format!("http://{addr}")),
        })
        .build();

    let res = client.translate("ende", "Haus").await;
    assert!(res.is_err());

    let head = proxy.await.unwrap();
    assert!(
        request_line(&head).starts_with("CONNECT dict.leo.org:443 "),
        "{head}"
    );
}

#[tokio::test]
async fn http_only_proxy_leaves_https_direct() {
    // 代理监听但从不accept，https请求如果走了代理会一直没有响应
    let unused_proxy = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let proxy_addr = unused_proxy.local_addr().unwrap();

    let target = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let target_addr = target.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut stream, _) = target.accept().await.unwrap();
        let mut buf = [0u8; 16];
        let n = stream.read(&mut buf).await.unwrap();
        buf[..n].to_vec()
    });

    let client = Client::builder()
        .host(format!("https://{target_addr}"))
        .proxy(ProxyConfig::http(format!("http://{proxy_addr}")))
        .build();
    let res = timeout(Duration::from_secs(10), client.translate("ende", "Haus"))
        .await
        .expect("https request was sent to the http proxy");
    assert!(res.is_err());

    // 直连时目标直接收到TLS握手（record type 0x16），而不是CONNECT
    let first = server.await.unwrap();
    assert_eq!(first.first(), Some(&0x16), "{first:?}");
}

#[tokio::test]
async fn configure_proxy_switches_between_proxy_and_direct() {
    let (proxy_addr, proxy) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder().build();
    client.configure_proxy(Some(&ProxyConfig::http(format!("http://{proxy_addr}"))));

    client.translate("ende", "Haus").await.unwrap();
    let head = proxy.await.unwrap();
    assert!(request_line(&head).starts_with("GET http://dict.leo.org/"), "{head}");

    let (addr, server) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder()
        .host(format!("http://{addr}"))
        .proxy(ProxyConfig::http("http://127.0.0.1:9"))
        .build();
    client.configure_proxy(None);

    client.translate("ende", "Haus").await.unwrap();
    let head = server.await.unwrap();
    assert!(request_line(&head).starts_with("GET /dictQuery/"), "{head}");
}

#[tokio::test]
async fn empty_result() {
    let body = r#"<xml><search hitWordCntLeft="0" hitWordCntRight="0"/><sectionlist/></xml>"#;
    let (addr, _server) = serve_once("200 OK", body).await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    let res = client.translate("frde", "qwertz").await.unwrap();
    assert!(res.is_empty());
}

#[tokio::test]
async fn unexpected_xml_is_an_error() {
    let (addr, _server) = serve_once("200 OK", "<xml><sectionlist/></xml>").await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    let res = client.translate("ende", "Haus").await;
    assert!(matches!(res, Err(Error::MissingSearch)), "{res:?}");
}

#[tokio::test]
async fn language_outside_pair_is_an_error() {
    let (addr, _server) = serve_once("200 OK", HAUS_XML).await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    let res = client.translate("frde", "Haus").await;
    assert!(matches!(res, Err(Error::InvalidEntry { index: 0, .. })), "{res:?}");
}

#[tokio::test]
async fn http_error_status() {
    let (addr, _server) = serve_once("503 Service Unavailable", "try again later").await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    match client.translate("ende", "Haus").await {
        Err(Error::RequestAPIFailed { status, message }) => {
            assert!(status.starts_with("503"), "{status}");
            assert_eq!(message, "try again later");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::builder().host(format!("http://{addr}")).build();
    let res = client.translate("ende", "Haus").await;
    assert!(matches!(res, Err(Error::Reqwest(_))), "{res:?}");
}

#[tokio::test]
async fn malformed_proxy_fails_on_request() {
    let client = Client::builder()
        .proxy(ProxyConfig::http("http://[::1:8080"))
        .build();

    let res = client.translate("ende", "Haus").await;
    assert!(matches!(res, Err(Error::Proxy { .. })), "{res:?}");
}

#[cfg(feature = "suggest")]
#[tokio::test]
async fn suggest_direct() {
    let (addr, server) = serve_once("200 OK", r#"["hau",["Haus","Haut","Haufen"]]"#).await;
    let client = Client::builder().host(format!("http://{addr}")).build();

    let res = client.suggest("ende", "hau").await.unwrap();
    assert_eq!(res, ["Haus", "Haut", "Haufen"]);

    let head = server.await.unwrap();
    assert!(
        request_line(&head)
            .starts_with("GET /dictQuery/m-query/conf/ende/query.conf/strlist.json?q=hau "),
        "{head}"
    );
}

#[tokio::test]
#[ignore]
async fn translate_live() {
    let client = Client::builder().build();
    let res = client.translate("ende", "Haus").await;
    match res {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}
