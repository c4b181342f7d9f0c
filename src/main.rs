use ice_trials::IceTrialsApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_title("Ice Trials"),
        ..Default::default()
    };
    eframe::run_native(
        "Ice Trials",
        options,
        Box::new(|_cc| Ok(Box::new(IceTrialsApp::new()))),
    )
}
