//! Prompt builders for the three request kinds

use chrono::{Datelike, NaiveDate};

/// Instruction for a single-day lookup
///
/// Lists exactly the eight pieces of information `LunarDetails` carries.
pub fn lunar_details_prompt(date: NaiveDate) -> String {
    format!(
        "You are an expert in the traditional Vietnamese perpetual calendar and feng shui.\n\
         Provide detailed information for the solar calendar date: {}/{}/{}.\n\
         \n\
         I need accurate information about:\n\
         1. The lunar date (day/month).\n\
         2. The stem-branch year (e.g. Giap Thin).\n\
         3. The five-element classification of the day (e.g. Fire - Lamp Fire).\n\
         4. Auspicious hours (the favorable time windows of the day).\n\
         5. Inauspicious hours (the unfavorable time windows).\n\
         6. Short advice for this day.\n\
         7. 3 things worth doing.\n\
         8. 3 things to avoid.\n",
        date.day(),
        date.month(),
        date.year()
    )
}

/// Instruction for a two-date compatibility reading
pub fn compatibility_prompt(date1: NaiveDate, date2: NaiveDate) -> String {
    format!(
        "Analyze the compatibility (romance/partnership) between a person born on {} \
         and a person born on {}.\n\
         Base the analysis on the Heavenly Stems, the Earthly Branches and the \
         five-element nap am.\n\
         Give a score on a scale of 100.\n",
        date1.format("%Y-%m-%d"),
        date2.format("%Y-%m-%d")
    )
}

/// Instruction for a free-text assistant reply
pub fn advice_prompt(query: &str) -> String {
    format!(
        "You are a wise feng shui virtual assistant. The user asks: \"{}\". \
         Answer briefly and helpfully, in a positive and spiritually healthy way.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunar_prompt_names_date_and_eight_items() {
        let prompt = lunar_details_prompt(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert!(prompt.contains("10/2/2024"));
        for n in 1..=8 {
            assert!(prompt.contains(&format!("{}. ", n)), "missing item {}", n);
        }
        assert!(!prompt.contains("9. "));
    }

    #[test]
    fn test_compatibility_prompt_uses_iso_dates() {
        let prompt = compatibility_prompt(
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(1992, 11, 20).unwrap(),
        );
        assert!(prompt.contains("1990-05-01"));
        assert!(prompt.contains("1992-11-20"));
        assert!(prompt.contains("scale of 100"));
    }

    #[test]
    fn test_advice_prompt_quotes_query_literally() {
        let prompt = advice_prompt("Is today good for moving house?");
        assert!(prompt.contains("\"Is today good for moving house?\""));
    }
}
