use clap::Parser;
use crop_advisor::utils::{logger, validation::Validate};
use crop_advisor::{
    AdviceRequest, Advisor, CentroidClassifier, CliConfig, Language, MyMemoryTranslator,
    OpenWeatherClient, Settings, SoilSample,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting crop-advisor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let language: Language = match cli.language.parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    // Load settings (built-in defaults unless a file is given), then refuse
    // to serve anything if the configuration or the model artifact is broken.
    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path);
            Settings::from_file(path)
        }
        None => Settings::embedded(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let classifier = match CentroidClassifier::from_file(&settings.classifier.model_path) {
        Ok(classifier) => classifier,
        Err(e) => {
            tracing::error!("Classifier startup failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let weather = OpenWeatherClient::new(&settings.weather)?;
    let translator = MyMemoryTranslator::new(&settings.translation)?;
    let advisor = Advisor::new(&settings, weather, translator, classifier);

    let request = AdviceRequest {
        sample: SoilSample {
            nitrogen: cli.nitrogen,
            phosphorus: cli.phosphorus,
            potassium: cli.potassium,
            acidity: cli.ph,
            rainfall: cli.rainfall,
        },
        location: cli.city.clone(),
        language,
    };

    match advisor.recommend(&request).await {
        Ok(result) => {
            println!("✅ Recommended Crop: {}", result.crop);
            if language != Language::DEFAULT {
                match &result.localized_crop {
                    Some(localized) => {
                        println!("🌍 Recommended Crop ({}): {}", language, localized)
                    }
                    None => println!(
                        "⚠️ Translation to {} unavailable right now; the English name stands",
                        language
                    ),
                }
            }
            println!(
                "🌡️ Current Temperature: {:.1}°C",
                result.weather.temperature_celsius
            );
            println!(
                "💧 Current Humidity: {:.0}%",
                result.weather.humidity_percent
            );
            println!("💰 Expected Profit: ₹{:.0} per acre", result.profit_per_acre);
            if let Some(image) = &result.image_url {
                println!("🖼️ Crop Image: {}", image);
            }
        }
        Err(e) => {
            tracing::error!("Request aborted: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(if e.is_recoverable() { 2 } else { 1 });
        }
    }

    Ok(())
}
