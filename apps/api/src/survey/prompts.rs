// Prompt construction for the survey AI calls.

use crate::survey::types::{ProblemApproach, WorkStyle};

/// Recommendations prompt template. Replace `{skills}`, `{interests}`,
/// `{work_style}`, `{problem_approach}` before sending.
const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are a highly qualified career counselor. Your task is to help a college student choose a profession.

Student profile:
- Skills: "{skills}"
- Interests: "{interests}"
- Work style: the student {work_style}.
- Problem approach: the student {problem_approach}.

Analyze this information as a whole. Taking the current labour market into account, recommend the 3-4 best-fitting professions.

For every recommended profession, return the following information STRICTLY as a JSON array of objects. Each object must have these fields:
- "professionName": (string) The profession name.
- "matchScore": (number) A fit score on a 100-point scale (e.g. 85), judging how well all factors (skills, interests, preferences) match the profession.
- "justification": (string) A short overall explanation of why this profession fits (1-2 sentences).
- "matchingFactors": (object) A breakdown of which profile aspects matched the profession:
    - "skills": (string[]) 1-3 of the student's skills that matter most for this profession. Empty array if none apply.
    - "interests": (string[]) 1-2 of the student's interests reflected in this profession. Empty array if none apply.
    - "preferences": (string[]) 1-2 short phrases describing how the student's work style or problem approach fits this profession. Empty array if there is no clear fit.

Example of one object in the JSON array:
{
  "professionName": "Web Developer",
  "matchScore": 90,
  "justification": "Your strong programming skills, interest in building websites, and analytical approach make this an excellent choice with high market demand.",
  "matchingFactors": {
    "skills": ["JavaScript", "Problem solving"],
    "interests": ["Building web applications"],
    "preferences": ["Suits an analytical approach", "Works for both team and solo settings"]
  }
}

IMPORTANT: Your answer must be EXCLUSIVELY a valid JSON array. Do not add any explanations, comments, markdown formatting (such as ```json), or any other text before or after the JSON array. Pure JSON only."#;

/// Roadmap prompt template. Replace `{profession_name}` before sending.
const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a practical step-by-step roadmap (3-5 clear steps) for a college student who wants to enter the profession "{profession_name}".

Include in the roadmap:
1. Key skills and knowledge to learn (with example technologies/tools).
2. Possible first moves (internships, pet projects, online courses).
3. Useful resources or communities.

Present the result as a numbered list of steps. Be as specific and practical as possible. Each step must be a separate list item on its own line."#;

/// Phrase describing the student's preferred work style, spliced into the
/// recommendations prompt.
fn describe_work_style(work_style: WorkStyle) -> &'static str {
    match work_style {
        WorkStyle::Team => "prefers working in a team",
        WorkStyle::Solo => "prefers working independently",
        WorkStyle::Any => "is flexible about work style (team or independent)",
    }
}

/// Phrase describing the student's problem-solving preference.
fn describe_problem_approach(approach: ProblemApproach) -> &'static str {
    match approach {
        ProblemApproach::Creative => {
            "leans toward a creative approach and unconventional solutions"
        }
        ProblemApproach::Analytical => {
            "prefers an analytical, structured approach to solving problems"
        }
        ProblemApproach::Any => "is flexible in how they approach problems (creative or analytical)",
    }
}

/// Builds the recommendations prompt from validated survey input.
pub fn build_recommend_prompt(
    skills: &str,
    interests: &str,
    work_style: WorkStyle,
    problem_approach: ProblemApproach,
) -> String {
    RECOMMEND_PROMPT_TEMPLATE
        .replace("{skills}", skills)
        .replace("{interests}", interests)
        .replace("{work_style}", describe_work_style(work_style))
        .replace("{problem_approach}", describe_problem_approach(problem_approach))
}

/// Builds the roadmap prompt for a (markdown-cleaned) profession name.
pub fn build_roadmap_prompt(profession_name: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE.replace("{profession_name}", profession_name)
}
