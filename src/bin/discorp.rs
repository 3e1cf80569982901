//! Command-line interface for discorp
//! Extracts feature vectors and label sequences from a dialogue corpus into
//! svmlight-style sparse files plus their sidecars.
//!
//! Usage:
//!   discorp `<corpus>` `<output>` [--window `<n>`]          - EDU-pair relation extraction
//!   discorp `<corpus>` `<output>` --single                - single-EDU dialogue-act extraction

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command};

use discorp::learning::{
    dump_edu_input, dump_pairings, dump_svmlight, dump_vocabulary, labels_comment, pair_features,
    single_edu_features, AllEdus, DialogueActVectorizer, EduSelector, FeatureVectorizer,
    LabelVectorizer, PairSelector, WindowedPairs,
};
use discorp::stac::{
    load_corpus, Dialogue, COORDINATING_RELATIONS, DIALOGUE_ACTS, SUBORDINATING_RELATIONS,
};

fn main() {
    let matches = Command::new("discorp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract features and labels from a discourse-annotated corpus")
        .arg_required_else_help(true)
        .arg(
            Arg::new("corpus")
                .help("Corpus directory of dialogue JSON files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output directory")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("5")
                .help("Ignore EDU pairs greater than this distance apart (-1 for no window)"),
        )
        .arg(
            Arg::new("single")
                .long("single")
                .action(ArgAction::SetTrue)
                .conflicts_with("pairs")
                .help("Extract features for single EDUs (instead of pairs)"),
        )
        .arg(
            Arg::new("pairs")
                .long("pairs")
                .action(ArgAction::SetTrue)
                .help("Extract features for EDU pairs (the default)"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress progress output"),
        )
        .get_matches();

    let corpus_dir = matches.get_one::<String>("corpus").unwrap();
    let output_dir = matches.get_one::<String>("output").unwrap();
    let window = *matches.get_one::<i64>("window").unwrap();
    let window = if window < 0 {
        None
    } else {
        Some(window as usize)
    };
    let quiet = matches.get_flag("quiet");

    let dialogues = load_corpus(corpus_dir).unwrap_or_else(|e| {
        eprintln!("Corpus error: {}", e);
        std::process::exit(1);
    });
    if !quiet {
        eprintln!("{} dialogues loaded from {}", dialogues.len(), corpus_dir);
    }

    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    }

    let stem = corpus_stem(corpus_dir);
    let result = if matches.get_flag("single") {
        extract_single(&dialogues, output_dir, &stem, quiet)
    } else {
        extract_pairs(&dialogues, output_dir, &stem, window, quiet)
    };
    if let Err(e) = result {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    }
}

/// Name output files after the corpus directory
fn corpus_stem(corpus_dir: &str) -> String {
    Path::new(corpus_dir)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corpus".to_owned())
}

fn sidecar(out_file: &Path, suffix: &str) -> PathBuf {
    let mut path = out_file.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

/// Single-EDU extraction: one instance per EDU, dialogue acts as labels
fn extract_single(
    dialogues: &[Dialogue],
    output_dir: &str,
    stem: &str,
    quiet: bool,
) -> Result<(), discorp::learning::OutputError> {
    let out_file = Path::new(output_dir).join(format!("{}.just-edus.sparse", stem));
    let selector = AllEdus;

    let mut vectorizer = FeatureVectorizer::new();
    let rows = vectorizer.fit_transform(
        dialogues
            .iter()
            .flat_map(|doc| selector.select(doc).into_iter().map(single_edu_features)),
    );

    let labeller = DialogueActVectorizer::new(selector, DIALOGUE_ACTS.iter().copied(), 1);
    let labels: Vec<usize> = labeller.transform(dialogues).collect();
    let comment = labels_comment(labeller.labelset());

    dump_svmlight(&rows, &labels, &out_file, Some(&comment))?;
    dump_edu_input(dialogues, sidecar(&out_file, ".edu_input"))?;
    dump_vocabulary(vectorizer.vocabulary(), sidecar(&out_file, ".vocab"))?;
    if !quiet {
        eprintln!("{} EDU instances -> {}", rows.len(), out_file.display());
    }
    Ok(())
}

/// Pairwise extraction: one instance per candidate pair, relations as labels
fn extract_pairs(
    dialogues: &[Dialogue],
    output_dir: &str,
    stem: &str,
    window: Option<usize>,
    quiet: bool,
) -> Result<(), discorp::learning::OutputError> {
    let out_file = Path::new(output_dir).join(format!("{}.relations.sparse", stem));
    let selector = WindowedPairs { window };

    let mut vectorizer = FeatureVectorizer::new();
    let rows = vectorizer.fit_transform(dialogues.iter().flat_map(|doc| {
        selector
            .select(doc)
            .into_iter()
            .map(|(source, target)| pair_features(source, target, doc))
            .collect::<Vec<_>>()
    }));

    let relation_labels = SUBORDINATING_RELATIONS
        .iter()
        .chain(COORDINATING_RELATIONS.iter())
        .copied();
    let labeller = LabelVectorizer::new(selector, relation_labels, 3);
    let labels: Vec<usize> = labeller.transform(dialogues).collect();
    let comment = labels_comment(labeller.labelset());

    dump_svmlight(&rows, &labels, &out_file, Some(&comment))?;
    dump_edu_input(dialogues, sidecar(&out_file, ".edu_input"))?;
    dump_pairings(dialogues, &selector, sidecar(&out_file, ".pairings"))?;
    dump_vocabulary(vectorizer.vocabulary(), sidecar(&out_file, ".vocab"))?;
    if !quiet {
        eprintln!("{} pair instances -> {}", rows.len(), out_file.display());
    }
    Ok(())
}
