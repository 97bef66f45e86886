use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::ws::session::ConnectionId;

const HEALTH_PATH: &str = "/health";
const WS_PATH: &str = "/ws";

/// How a finished request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// Successful `/health` poll, logged at debug.
    Probe,
    /// Websocket handshake accepted; the session takes over from here.
    WsUpgraded,
    /// Request to `/ws` that did not become a session.
    WsRejected,
    Served,
    ClientError,
    ServerError,
}

impl RequestClass {
    pub fn of(path: &str, status: StatusCode) -> Self {
        if status.is_server_error() {
            return RequestClass::ServerError;
        }
        match path {
            WS_PATH if status == StatusCode::SWITCHING_PROTOCOLS => RequestClass::WsUpgraded,
            WS_PATH => RequestClass::WsRejected,
            HEALTH_PATH if status.is_success() => RequestClass::Probe,
            _ if status.is_client_error() => RequestClass::ClientError,
            _ => RequestClass::Served,
        }
    }
}

/// Logs one structured line per request. Websocket upgrades carry the
/// connection id the session logs under, so the two can be joined.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, conn_id) = match &result {
                Ok(res) => (res.status(), connection_id(res)),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let line = RequestLine {
                method: &method,
                path: &path,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                conn_id,
            };
            line.emit(RequestClass::of(&path, status));

            result
        })
    }
}

fn connection_id<B>(res: &ServiceResponse<B>) -> Option<Uuid> {
    res.request()
        .extensions()
        .get::<ConnectionId>()
        .map(|id| id.0)
}

struct RequestLine<'a> {
    method: &'a str,
    path: &'a str,
    status: StatusCode,
    duration_us: u64,
    conn_id: Option<Uuid>,
}

impl RequestLine<'_> {
    fn emit(&self, class: RequestClass) {
        let Self {
            method,
            path,
            duration_us,
            ..
        } = *self;
        let status = self.status.as_u16();
        let conn_id = self.conn_id.map(|id| id.to_string()).unwrap_or_default();

        match class {
            RequestClass::Probe => debug!(
                http.method = method,
                url.path = path,
                http.status_code = status,
                duration_us,
                "health_probe"
            ),
            RequestClass::WsUpgraded => info!(
                url.path = path,
                http.status_code = status,
                conn_id = %conn_id,
                duration_us,
                "ws_upgraded"
            ),
            RequestClass::WsRejected => warn!(
                http.method = method,
                url.path = path,
                http.status_code = status,
                conn_id = %conn_id,
                "ws_upgrade_rejected"
            ),
            RequestClass::Served => info!(
                http.method = method,
                url.path = path,
                http.status_code = status,
                duration_us,
                "request_completed"
            ),
            RequestClass::ClientError => warn!(
                http.method = method,
                url.path = path,
                http.status_code = status,
                duration_us,
                "request_completed"
            ),
            RequestClass::ServerError => error!(
                http.method = method,
                url.path = path,
                http.status_code = status,
                duration_us,
                "request_failed"
            ),
        }
    }
}
