//! Character-budgeted badge labels

const ELLIPSIS: char = '…';
const ABBREVIATE_OVER: usize = 4;

const OVERRIDES: &[(&str, &str)] = &[
	("Retrieval-Augmented Generation", "RAG"),
	("Retrieval Augmented Generation", "RAG"),
	("Large Language Models", "LLMs"),
	("Machine Learning", "ML"),
	("Natural Language Processing", "NLP"),
	("Infrastructure as Code", "IaC"),
	("Continuous Integration", "CI/CD"),
	("Amazon Web Services", "AWS"),
	("Google Cloud Platform", "GCP"),
	("Business Intelligence", "BI"),
	("Data Visualization", "Data viz"),
	("Stakeholder Management", "Stakeholders"),
];

fn width(s: &str) -> usize {
	s.chars().count()
}

/// Shortens `name` to at most `budget` chars.
///
/// Tries, in order: the name itself, the override table, 4-char word
/// abbreviations, initials, then a hard cut with a trailing ellipsis.
pub fn shorten(name: &str, budget: usize) -> String {
	if width(name) <= budget {
		return name.to_string();
	}

	if let Some((_, short)) = OVERRIDES
		.iter()
		.find(|(long, _)| long.eq_ignore_ascii_case(name.trim()))
	{
		if width(short) <= budget {
			return short.to_string();
		}
	}

	let words: Vec<&str> = name.split_whitespace().collect();

	let abbreviated = words
		.iter()
		.map(|word| {
			if width(word) > ABBREVIATE_OVER {
				let head: String = word.chars().take(ABBREVIATE_OVER).collect();
				format!("{}{}", head, ELLIPSIS)
			} else {
				word.to_string()
			}
		})
		.collect::<Vec<_>>()
		.join(" ");
	if width(&abbreviated) <= budget {
		return abbreviated;
	}

	let initials = words
		.iter()
		.filter_map(|word| word.chars().next())
		.map(|c| format!("{}.", c))
		.collect::<Vec<_>>()
		.join(" ");
	if width(&initials) <= budget {
		return initials;
	}

	let mut cut: String = name.chars().take(budget.saturating_sub(1)).collect();
	if budget > 0 {
		cut.push(ELLIPSIS);
	}
	cut
}
