// src/cli.rs
use std::{env, error::Error};

use crate::{
    config::options::{ApiOptions, TransportMode},
    core::{FetchResult, normalize::display_value},
    dispatch::Dispatcher,
    form::{FormInput, FormState},
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub region: String,
    pub data_type: String,
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub direct: bool,
    pub json: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Fetch(CliArgs),
}

/// Prints one line to stderr when the request starts; stdout stays clean.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self) {
        eprintln!("Fetching…");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Fetch(args) => fetch(&args),
    }
}

fn fetch(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let mut form = FormState {
        input: FormInput::new(args.data_type.as_str(), args.region.as_str()),
        ..FormState::default()
    };
    let Some(req) = form.submit() else {
        for e in &form.errors {
            eprintln!("{e}");
        }
        return Err("Invalid input".into());
    };

    let opts = apply_args(ApiOptions::from_env(), args);
    logf!("CLI: {} {} mode={:?}", req.data_type, req.region, opts.mode);
    let dispatcher = Dispatcher::from_options(&opts)?;

    if args.json {
        let mut prog = CliProgress;
        prog.begin();
        let (_, result) = dispatcher.dispatch(&req);
        prog.finish();
        return match result {
            FetchResult::Success { payload } => {
                println!("{}", serde_json::to_string_pretty(&payload)?);
                Ok(())
            }
            FetchResult::Failure { message } => Err(message.into()),
        };
    }

    let reading = dispatcher.submit(&req, &mut CliProgress)?;
    println!("Region: {}", reading.zone);
    println!("Carbon: {}", display_value(&reading.carbon));
    println!("Fossil fuel %: {}", display_value(&reading.fossil_fuel));
    Ok(())
}

/// Flags win over the environment.
pub fn apply_args(mut opts: ApiOptions, args: &CliArgs) -> ApiOptions {
    if let Some(t) = &args.token {
        opts.auth_token = Some(t.clone());
    }
    if let Some(u) = &args.base_url {
        opts.base_url = u.clone();
    }
    if args.direct {
        opts.mode = TransportMode::Direct;
    }
    opts
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut region = None;
    let mut data_type = s!(crate::core::DataType::CarbonIntensity.as_str());
    let mut token = None;
    let mut base_url = None;
    let mut direct = false;
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-r" | "--region" => region = Some(args.next().ok_or("Missing value for --region")?),
            "-d" | "--data-type" => data_type = args.next().ok_or("Missing value for --data-type")?,
            "--token" => token = Some(args.next().ok_or("Missing value for --token")?),
            "--base-url" => base_url = Some(args.next().ok_or("Missing value for --base-url")?),
            "--direct" => direct = true,
            "--json" => json = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let region = region.ok_or("Specify -r <region>")?;
    Ok(Command::Fetch(CliArgs { region, data_type, token, base_url, direct, json }))
}
