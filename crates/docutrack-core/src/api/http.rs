//! HTTP Implementation
//!
//! `ContractApi` over reqwest. In the browser reqwest goes through `fetch`,
//! natively through hyper; the code is the same for both.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::ContractApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Analytics, Contract, ContractFilters, ContractType, Download, UploadFile};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpContractApi {
    client: Client,
    config: ClientConfig,
}

impl Default for HttpContractApi {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl HttpContractApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `/contracts/{id}` plus an optional trailing action segment
    fn contract_url(&self, id: &str, action: Option<&str>) -> String {
        let id = utf8_percent_encode(id, PATH_SEGMENT);
        match action {
            Some(action) => self.config.endpoint(&format!("contracts/{}/{}", id, action)),
            None => self.config.endpoint(&format!("contracts/{}", id)),
        }
    }

    /// Send and reject anything that is not a 2xx
    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        log::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|e| ApiError::Transport {
            method,
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(url: &str, response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn user_query(user_id: &str) -> Vec<(&'static str, &str)> {
        if user_id.is_empty() {
            Vec::new()
        } else {
            vec![("userId", user_id)]
        }
    }

    fn upload_form(url: &str, files: &[UploadFile], user_id: &str) -> ApiResult<Form> {
        let mut form = Form::new();
        for file in files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            if let Some(content_type) = &file.content_type {
                part = part.mime_str(content_type).map_err(|e| ApiError::Request {
                    url: url.to_string(),
                    message: format!("invalid content type for {}: {}", file.name, e),
                })?;
            }
            form = form.part("files", part);
        }
        Ok(form.text("userId", user_id.to_string()))
    }
}

#[async_trait(?Send)]
impl ContractApi for HttpContractApi {
    async fn list(&self, user_id: &str, filters: &ContractFilters) -> ApiResult<Vec<Contract>> {
        let url = self.config.endpoint("contracts");
        let request = self.client.get(&url).query(&filters.query_pairs(user_id));
        let response = self.send("GET", &url, request).await?;
        Self::json(&url, response).await
    }

    async fn upload(&self, files: &[UploadFile], user_id: &str) -> ApiResult<Vec<Contract>> {
        let url = self.config.endpoint("contracts/upload");
        let form = Self::upload_form(&url, files, user_id)?;
        let request = self.client.post(&url).multipart(form);
        let response = self.send("POST", &url, request).await?;
        Self::json(&url, response).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.contract_url(id, None);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }

    async fn download(&self, id: &str, filename: &str) -> ApiResult<Download> {
        let url = self.contract_url(id, Some("download"));
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(Download {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        })
    }

    async fn analytics(&self, user_id: &str) -> ApiResult<Analytics> {
        let url = self.config.endpoint("analytics/summary");
        let request = self.client.get(&url).query(&Self::user_query(user_id));
        let response = self.send("GET", &url, request).await?;
        Self::json(&url, response).await
    }

    async fn contract_types(&self, user_id: &str) -> ApiResult<Vec<ContractType>> {
        let url = self.config.endpoint("analytics/contract-types");
        let request = self.client.get(&url).query(&Self::user_query(user_id));
        let response = self.send("GET", &url, request).await?;
        Self::json(&url, response).await
    }

    async fn reprocess(&self, id: &str) -> ApiResult<()> {
        let url = self.contract_url(id, Some("reprocess"));
        self.send("POST", &url, self.client.post(&url)).await?;
        Ok(())
    }

    async fn update(&self, id: &str, contract: &Contract) -> ApiResult<Contract> {
        let url = self.contract_url(id, None);
        let request = self.client.put(&url).json(contract);
        let response = self.send("PUT", &url, request).await?;
        Self::json(&url, response).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use super::*;

    fn api() -> HttpContractApi {
        HttpContractApi::new(ClientConfig::new("http://backend.test/api"))
    }

    #[test]
    fn test_contract_urls() {
        let api = api();
        assert_eq!(api.contract_url("c-1", None), "http://backend.test/api/contracts/c-1");
        assert_eq!(
            api.contract_url("c-1", Some("download")),
            "http://backend.test/api/contracts/c-1/download"
        );
        assert_eq!(
            api.contract_url("c-1", Some("reprocess")),
            "http://backend.test/api/contracts/c-1/reprocess"
        );
    }

    #[test]
    fn test_contract_id_is_one_segment() {
        let api = api();
        assert_eq!(
            api.contract_url("a/b c", None),
            "http://backend.test/api/contracts/a%2Fb%20c"
        );
    }

    #[test]
    fn test_user_query_omitted_when_blank() {
        assert!(HttpContractApi::user_query("").is_empty());
        assert_eq!(HttpContractApi::user_query("admin"), vec![("userId", "admin")]);
    }

    #[test]
    fn test_list_request_carries_filters() {
        let api = api();
        let filters = ContractFilters {
            search: "acme corp".to_string(),
            extraction_status: "manual_required".to_string(),
            contract_type: String::new(),
        };
        let url = api.config().endpoint("contracts");
        let request = api
            .client
            .get(&url)
            .query(&filters.query_pairs("user1"))
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://backend.test/api/contracts?userId=user1&search=acme+corp&extractionStatus=manual_required"
        );
    }

    #[test]
    fn test_upload_form_rejects_bad_mime() {
        let url = api().config().endpoint("contracts/upload");
        let files = vec![UploadFile::new("a.docx", Some("not a mime".to_string()), vec![1])];
        match HttpContractApi::upload_form(&url, &files, "user1") {
            Err(ApiError::Request { url: failed, message }) => {
                assert_eq!(failed, "http://backend.test/api/contracts/upload");
                assert!(message.contains("a.docx"));
            }
            other => panic!("expected a request error, got {:?}", other.map(|_| ())),
        }

        let docx_mime = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        let files = vec![UploadFile::new("a.docx", Some(docx_mime.to_string()), vec![1])];
        assert!(HttpContractApi::upload_form(&url, &files, "user1").is_ok());
    }

    // ========================
    // Against a local server
    // ========================

    /// Serve one canned response; the handle yields the raw request received
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (HttpContractApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        let api = HttpContractApi::new(ClientConfig::new(format!("http://{}/api", addr)));
        (api, handle)
    }

    /// Headers plus a `Content-Length` body
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    const ONE_CONTRACT: &str = concat!(
        r#"[{"id":"c-1","filename":"c-1_msa.docx","originalFilename":"msa.docx","#,
        r#""filePath":null,"fileSize":2048,"uploadDate":"2024-01-15T10:00:00","#,
        r#""variables":{"contractType":"MSA","partyNames":["Acme Corp"]},"#,
        r#""extractionStatus":"auto_extracted","userId":"user1"}]"#,
    );

    #[tokio::test]
    async fn test_list_decodes_contracts() {
        let (api, server) = serve_once("200 OK", ONE_CONTRACT).await;

        let contracts = api.list("user1", &ContractFilters::default()).await.unwrap();

        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].display_name(), "msa.docx");
        assert_eq!(contracts[0].file_path, "");
        assert_eq!(contracts[0].variables.party_names(), ["Acme Corp".to_string()]);
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/contracts?userId=user1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let (api, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let err = api.list("user1", &ContractFilters::default()).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(matches!(err, ApiError::Status { method: "GET", .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (api, server) = serve_once("200 OK", "[{not json").await;

        let err = api.list("user1", &ContractFilters::default()).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }), "got {:?}", err);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop so nothing listens on the port
        let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
        let api = HttpContractApi::new(ClientConfig::new(format!("http://{}/api", addr)));

        let err = api.delete("c-1").await.unwrap_err();

        assert!(matches!(err, ApiError::Transport { method: "DELETE", .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_update_puts_camel_case_body() {
        let mut contract = serde_json::from_str::<Vec<Contract>>(ONE_CONTRACT).unwrap().remove(0);
        contract.variables.amount = Some("$10,000".to_string());
        let (api, server) = serve_once("200 OK", &ONE_CONTRACT[1..ONE_CONTRACT.len() - 1]).await;

        let saved = api.update("c-1", &contract).await.unwrap();

        assert_eq!(saved.id, "c-1");
        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /api/contracts/c-1 HTTP/1.1"));
        assert!(request.contains(r#""originalFilename":"msa.docx""#));
        assert!(request.contains(r#""amount":"$10,000""#));
    }
}
