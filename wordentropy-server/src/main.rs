use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};

use serde::Deserialize;
use wordentropy_core::error::GenerateError;
use wordentropy_core::generate::generator::Generator;
use wordentropy_core::generate::options::{GenerateOptions, WordListOptions};

/// Struct representing query parameters for the `/v1/passphrases` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	length: Option<usize>,
	fragment_length: Option<usize>,
	prudish: Option<bool>,
	no_spaces: Option<bool>,
	add_digit: Option<bool>,
	add_symbol: Option<bool>,
	symbols: Option<String>,
}

impl GenerateParams {
	/// Maps the query onto generation options.
	///
	/// Absent parameters map to the zero values, which select the
	/// library defaults during validation.
	fn to_options(&self) -> GenerateOptions {
		GenerateOptions {
			count: self.count.unwrap_or(0),
			length: self.length.unwrap_or(0),
			fragment_length: self.fragment_length.unwrap_or(0),
			prudish: self.prudish.unwrap_or(false),
			no_spaces: self.no_spaces.unwrap_or(false),
			add_digit: self.add_digit.unwrap_or(false),
			add_symbol: self.add_symbol.unwrap_or(false),
			symbols: self
				.symbols
				.as_deref()
				.map(|s| s.chars().collect())
				.unwrap_or_default(),
		}
	}
}

/// HTTP GET endpoint `/v1/passphrases`
///
/// Generates passphrases according to the query parameters and returns
/// them one per line. Option bound violations are client errors; entropy
/// or word list problems are server errors.
#[get("/v1/passphrases")]
async fn get_passphrases(
	data: web::Data<Generator>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	match data.generate_passphrases(&query.to_options()) {
		Ok(passphrases) => HttpResponse::Ok().body(passphrases.join("\n")),
		Err(e) => match e {
			GenerateError::CountTooLarge(_)
			| GenerateError::LengthTooLarge(_)
			| GenerateError::FragmentLengthTooLarge(_) => {
				HttpResponse::BadRequest().body(e.to_string())
			}
			_ => HttpResponse::InternalServerError().body(e.to_string()),
		},
	}
}

/// HTTP GET endpoint `/v1/word_types`
///
/// Lists every word type and how many words were classified into it.
#[get("/v1/word_types")]
async fn get_word_types(data: web::Data<Generator>) -> impl Responder {
	let mut lines: Vec<String> = data
		.word_map()
		.iter()
		.map(|(word_type, words)| format!("{word_type}: {}", words.len()))
		.collect();
	lines.sort();
	HttpResponse::Ok().body(lines.join("\n"))
}

/// Main entry point for the server.
///
/// Loads the word lists once and starts an Actix-web HTTP server over the
/// resulting generator.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Word list paths come from `WORDENTROPY_WORDLIST` and
///   `WORDENTROPY_OFFENSIVE`, with `./data` defaults.
/// - The generator is immutable after loading, so requests share it
///   without a lock.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let wordlist = env::var("WORDENTROPY_WORDLIST")
		.unwrap_or_else(|_| "./data/part-of-speech.txt".to_owned());
	let offensive = env::var("WORDENTROPY_OFFENSIVE").ok();
	let options = WordListOptions {
		wordlist: wordlist.into(),
		offensive: offensive.map(Into::into),
	};

	let generator = Generator::load(&options).map_err(std::io::Error::other)?;
	log::info!(
		"serving {} words on 127.0.0.1:5000",
		generator.word_map().word_count()
	);
	let shared_generator = web::Data::new(generator);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.service(get_passphrases)
			.service(get_word_types)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
