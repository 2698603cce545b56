// alcloader/demos/alcinfo.rs
//
//! Prints what the OpenAL library and a device support.

use alcloader::{Capability, Error, Loader, LoaderConfig};
use clap::{App, Arg};
use std::process;

static APP_NAME: &'static str = "alcloader alcinfo example";

fn main() {
    env_logger::init();

    let matches = App::new(APP_NAME)
        .arg(
            Arg::with_name("library")
                .short("l")
                .long("library")
                .takes_value(true)
                .value_name("PATH")
                .help("Load OpenAL from this file"),
        )
        .arg(
            Arg::with_name("device")
                .short("d")
                .long("device")
                .takes_value(true)
                .value_name("NAME")
                .help("Open this device instead of the default one"),
        )
        .get_matches();

    let mut config = LoaderConfig::from_env();
    if let Some(path) = matches.value_of("library") {
        config = config.library_path(path);
    }

    if let Err(err) = run(&config, matches.value_of("device")) {
        eprintln!("alcinfo: {}", err);
        process::exit(1);
    }
}

fn run(config: &LoaderConfig, device_name: Option<&str>) -> Result<(), Error> {
    let loader = Loader::with_config(config)?;
    println!("Library: {}", loader.library_path().display());

    println!("Playback devices:");
    for name in loader.enumerate_devices()? {
        println!("    {}", name);
    }
    if let Some(name) = loader.default_device_name()? {
        println!("Default playback device: {}", name);
    }
    println!("Capture devices:");
    for name in loader.enumerate_capture_devices()? {
        println!("    {}", name);
    }

    let device = loader.create_device(device_name)?;
    let capabilities = device.capabilities();
    println!("ALC version: {}", device.version());
    println!("Capabilities:");
    for token in capabilities.tokens() {
        println!("    {}", token);
    }

    print_capability("ALC_EXT_CAPTURE", &capabilities.capture);
    print_capability("ALC_EXT_thread_local_context", &capabilities.thread_local_context);
    print_capability("ALC_SOFT_loopback", &capabilities.soft_loopback);
    print_capability("ALC_SOFT_pause_device", &capabilities.soft_pause_device);
    print_capability("ALC_SOFT_HRTF", &capabilities.soft_hrtf);
    print_capability("ALC_SOFT_reopen_device", &capabilities.soft_reopen_device);
    print_capability("ALC_SOFT_device_clock", &capabilities.soft_device_clock);

    if capabilities.soft_hrtf.is_available() {
        for specifier in device.hrtf_specifiers()? {
            println!("HRTF: {}", specifier);
        }
    }
    if capabilities.soft_device_clock.is_available() {
        let (clock, latency) = device.clock_latency()?;
        println!("Device clock: {} ns, latency: {} ns", clock, latency);
    }
    Ok(())
}

fn print_capability<T>(name: &str, capability: &Capability<T>) {
    let state = if capability.is_available() { "available" } else { "unavailable" };
    println!("{}: {}", name, state);
}
