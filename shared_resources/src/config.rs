use std::fs;
use std::collections::HashMap;
use std::env;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct LogConfigFile {
    pub file_path: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub elevator: HashMap<String, u8>,
    pub timing: HashMap<String, u64>,
    pub log: LogConfigFile,
}

#[derive(Debug, Clone)]
pub struct ElevatorConfig {
    pub num_floors: u8,
    pub ground_floor: u8,
}

/// Simulated hold intervals, all in milliseconds.
#[derive(Debug, Clone)]
pub struct TimingConfig {
    pub service_hold_ms: u64,
    pub stop_hold_ms: u64,
    pub reversal_hold_ms: u64,
    pub overweight_settle_ms: u64,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file_path: String,
}

#[derive(Debug, Clone)]
pub struct CabinConfig {
    pub elevator: ElevatorConfig,
    pub timing: TimingConfig,
    pub log: LogConfig,
}

fn read_config_file() -> Result<ConfigFile, serde_json::Error> {
    let file_path = "config.json";
    let fallback_file_path = "_config.json";
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(_) => {
            println!("No configuration file provided, using default settings...");
            fs::read_to_string(fallback_file_path).unwrap()
        },
    };
    serde_json::from_str(&config_contents)
}

fn parse_env_args(default_logfile: String) -> String {
    let mut logfile = default_logfile;

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--logfile" => {
                logfile = arg_pair[1].clone();
            },
            _ => {println!("illegal argument {}, skipping...", arg_pair[0]);},
        }
    }
    logfile
}

impl CabinConfig {
    pub fn get() -> Self {
        let config_file = read_config_file().unwrap();
        let file_path = parse_env_args(config_file.log.file_path.clone());

        CabinConfig {
            elevator: ElevatorConfig {
                num_floors: config_file.elevator["num_floors"],
                ground_floor: config_file.elevator["ground_floor"],
            },
            timing: TimingConfig {
                service_hold_ms: config_file.timing["service_hold_ms"],
                stop_hold_ms: config_file.timing["stop_hold_ms"],
                reversal_hold_ms: config_file.timing["reversal_hold_ms"],
                overweight_settle_ms: config_file.timing["overweight_settle_ms"],
            },
            log: LogConfig {
                file_path: file_path,
            },
        }
    }
}
