// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Prompt text for each kind of generated content.

use crate::ContentKind;

/// Build the prompt for `kind` about `city`.
pub fn prompt(kind: ContentKind, city: &str) -> String {
    match kind {
        ContentKind::Article => article(city),
        ContentKind::Tutorial => tutorial(city),
        ContentKind::Quiz => quiz(city),
        ContentKind::ShowsIntro => shows_intro(city),
    }
}

fn article(city: &str) -> String {
    format!(
        "Generate a detailed, engaging blog-style article about the Kathputli (puppet) history, \
culture, uniqueness, and puppetry heritage of {city} in Rajasthan, India. Include information about:
- Historical significance of Kathputli in this city
- Cultural importance and traditions
- Unique characteristics of puppetry in this region
- Famous puppeteers or families
- Materials and techniques used
- Current state and preservation efforts

Format with clear sections use markdown headings (#, ##, ###), but DO NOT use bold formatting \
with ** ** or inline code fences. Make it informative yet captivating. Write approximately \
800-1000 words."
    )
}

fn tutorial(city: &str) -> String {
    format!(
        "Provide a detailed step-by-step tutorial on how a beginner can make an authentic \
Rajasthani Kathputli puppet, specifically in the style of {city}. Include:
- Materials needed (easily available items)
- 8-10 clear steps with detailed instructions
- Tips for beginners
- Traditional techniques

Format each step clearly with markdown headings (## Step X: Title) and detailed descriptions. \
Make it practical and achievable for beginners."
    )
}

fn quiz(city: &str) -> String {
    format!(
        r#"Generate a 7-question multiple-choice quiz to test knowledge about Kathputli tradition in {city}, Rajasthan.

For each question provide:
- The question text
- 4 options (A, B, C, D)
- Indicate the correct answer as a zero-based index (0-3).

Make questions interesting and educational, covering history, techniques, cultural significance, and famous aspects of Kathputli in {city}.

Strictly return valid JSON ONLY with this exact structure, no extra text or markdown:

{{
  "questions": [
    {{
      "question": "Question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0
    }}
  ]
}}"#
    )
}

fn shows_intro(city: &str) -> String {
    format!(
        "Write a short, engaging introduction (150-250 words) about Kathputli performances in \
{city}, Rajasthan.

Explain:
- What makes live puppet shows in this city unique
- Typical settings (streets, havelis, tourist spots, festivals etc.)
- How audiences experience these performances today

Use markdown with a main heading and 1-2 subheadings."
    )
}
