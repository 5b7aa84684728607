/// The one fixed prompt, with the user's query embedded verbatim. It demands
/// the exact line-labeled layout the parser scans for, with no markup.
pub fn explanation_prompt(query: &str) -> String {
    format!(
        "Explain the English word or phrase \"{query}\" for a language learner. \
Answer in plain text only, no markdown, no asterisks or other markup characters, \
using exactly this layout:\n\
{query} - a short one-sentence definition\n\
PRONUNCIATION: [pronunciation in simple phonetic respelling]\n\
1. First example sentence using the word.\n\
2. Second example sentence using the word.\n\
3. Third example sentence using the word.\n\
SYNONYMS: three synonyms separated by commas\n\
ANTONYMS: three antonyms separated by commas\n\
Перевод: the Russian translation of the word\n\
ИДИОМЫ: common idioms with the word, or \"none\""
    )
}
