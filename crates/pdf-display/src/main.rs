use clap::Parser;
use eframe::egui;
use pdf_display::app::PdfDisplayApp;
use pdf_display::constants::WINDOW_TITLE;
use pdf_display::{DisplayConfig, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-display")]
#[command(about = "Display a PDF document one page at a time", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE", help = "JSON config file")]
    config: Option<PathBuf>,

    #[arg(short, long, value_name = "PDF", help = "PDF document to display")]
    document: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory holding the PDFium library")]
    pdfium_dir: Option<PathBuf>,

    #[arg(short, long, help = "Render scale factor")]
    scale: Option<f32>,
}

impl Cli {
    fn into_config(self) -> Result<DisplayConfig> {
        let mut config = match &self.config {
            Some(path) => DisplayConfig::from_file(path)?,
            None => DisplayConfig::default(),
        };

        if let Some(document) = self.document {
            config.document_path = document;
        }
        if let Some(dir) = self.pdfium_dir {
            config.pdfium_library_dir = Some(dir);
        }
        if let Some(scale) = self.scale {
            config.render_scale = scale;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default().with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PdfDisplayApp::new(config)))),
    )
}
