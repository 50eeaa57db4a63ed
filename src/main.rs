//! Camera Access CLI
//!
//! Command-line interface for testing and demonstrating the camera
//! access layer against a mock host platform.

use camera_access::{
    CameraDirectory, DeviceInfo, DeviceKind, FileConfig, MediaStream, MockHost, StreamProfile,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "camera-access", version, about = "Camera discovery demo over a mock host")]
struct Args {
    /// Path to a TOML configuration file with a [stream] table.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start only the camera with this device id (default: all).
    #[arg(long)]
    device: Option<String>,

    /// Expose only the legacy callback primitive on the mock host.
    #[arg(long)]
    legacy: bool,

    /// Expose no acquisition primitive at all.
    #[arg(long)]
    no_capability: bool,
}

fn demo_host(args: &Args) -> MockHost {
    let host = MockHost::with_devices(vec![
        DeviceInfo::new(DeviceKind::VideoInput, "HD Cam (04f2:b5d6)", "abc"),
        DeviceInfo::new(DeviceKind::VideoInput, "Rear Camera (1bcf)", "def"),
        DeviceInfo::new(DeviceKind::AudioInput, "Mic", "xyz"),
    ]);
    if args.no_capability {
        host.without_capability()
    } else if args.legacy {
        host.legacy_only()
    } else {
        host
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Camera Access v{}", camera_access::VERSION);
    info!("This is a demonstration using a mock host platform");

    let profile = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config.stream,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => StreamProfile::default(),
    };

    let host = Arc::new(demo_host(&args));

    let directory = match CameraDirectory::with_profile(host, profile) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to resolve host capability: {}", e);
            std::process::exit(1);
        }
    };

    let cameras = match directory.cameras().await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to discover cameras: {}", e);
            std::process::exit(1);
        }
    };

    info!("Discovered {} camera(s)", cameras.len());
    for camera in &cameras {
        println!("{}  {}", camera.id(), camera.name().unwrap_or("(unnamed)"));
    }

    for camera in &cameras {
        if let Some(ref wanted) = args.device {
            if camera.id() != wanted.as_str() {
                continue;
            }
        }

        match camera.start().await {
            Ok(stream) => {
                info!(
                    "Started {} with {} video track(s)",
                    camera.id(),
                    stream.video_tracks().len()
                );
                camera.stop().await;
                info!("Stopped {}", camera.id());
            }
            Err(e) => {
                warn!("Failed to start {}: {}", camera.id(), e);
            }
        }
    }

    info!("Done");
}
