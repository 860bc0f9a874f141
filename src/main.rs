use timekeeper::config::ServerConfig;
use timekeeper::engine::TimerEngine;
use timekeeper::timekeeper_proto::timekeeper_server::{Timekeeper, TimekeeperServer};
use timekeeper::timekeeper_proto::{
    ActiveResponse, CreateTimerRequest, PurgeRequest, PurgeResponse, TimerRequest, TimerStatus,
};
use tonic::{Request, Response, Status};
use tracing::info;

struct TimekeeperService {
    engine: TimerEngine,
}

#[tonic::async_trait]
impl Timekeeper for TimekeeperService {
    async fn create_timer(
        &self,
        request: Request<CreateTimerRequest>,
    ) -> Result<Response<TimerStatus>, Status> {
        self.engine.create_timer(&request.into_inner()).map(Response::new)
    }

    async fn start_timer(
        &self,
        request: Request<TimerRequest>,
    ) -> Result<Response<TimerStatus>, Status> {
        self.engine.start_timer(&request.into_inner()).map(Response::new)
    }

    async fn get_timer(
        &self,
        request: Request<TimerRequest>,
    ) -> Result<Response<TimerStatus>, Status> {
        self.engine.get_timer(&request.into_inner()).map(Response::new)
    }

    async fn is_active(
        &self,
        request: Request<TimerRequest>,
    ) -> Result<Response<ActiveResponse>, Status> {
        self.engine.is_active(&request.into_inner()).map(Response::new)
    }

    async fn drop_timer(
        &self,
        request: Request<TimerRequest>,
    ) -> Result<Response<TimerStatus>, Status> {
        self.engine.drop_timer(&request.into_inner()).map(Response::new)
    }

    async fn purge_expired(
        &self,
        request: Request<PurgeRequest>,
    ) -> Result<Response<PurgeResponse>, Status> {
        self.engine.purge_expired(&request.into_inner()).map(Response::new)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;
    let service = TimekeeperService {
        engine: TimerEngine::new(config.max_timers),
    };
    info!(%addr, max_timers = config.max_timers, "timekeeper listening");
    tonic::transport::Server::builder()
        .add_service(TimekeeperServer::new(service))
        .serve(addr)
        .await?;
    Ok(())
}
