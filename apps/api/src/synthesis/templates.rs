// Document templates. Fill with `fill_template`; placeholders are `{name}`.

/// Plain resume. Placeholders: `{role}`.
pub const RESUME_TEMPLATE: &str = "PROFESSIONAL RESUME

Target Role: {role}

PROFESSIONAL SUMMARY
Motivated professional seeking a role in this domain.
Strong foundation in technical skills and problem solving.

CORE SKILLS
- Python, Machine Learning, Streamlit, Data Analysis
- Communication, Teamwork, Problem Solving
- Tools: Git, Jupyter Notebook, VS Code

PROJECT EXPERIENCE
AI Resume & Portfolio Builder
- Built a ML model to classify resumes.
- Deployed an interactive app using Streamlit.

EDUCATION
Bachelor\u{2019}s Degree in a relevant discipline

CERTIFICATIONS
- Python for Data Science
- Machine Learning Fundamentals

ADDITIONAL INFORMATION
Strong interest in continuous learning and AI applications.
";

/// Resume tailored to a job description.
/// Placeholders: `{role}`, `{job_description}`, `{candidate_text}`.
pub const CUSTOMIZED_RESUME_TEMPLATE: &str = "PROFESSIONAL RESUME (CUSTOMIZED)

Target Role: {role}

CUSTOMIZED SUMMARY
This resume has been tailored to align with the job description.

JOB DESCRIPTION KEY REQUIREMENTS
{job_description}

CANDIDATE PROFILE
{candidate_text}

KEY ALIGNMENT
- Skills aligned with job requirements.
- Keywords optimized for ATS systems.
- Content adjusted to match role expectations.
";

/// Cover letter. Placeholders: `{role}`.
pub const COVER_LETTER_TEMPLATE: &str = "Dear Hiring Manager,

I am applying for the {role} position at your organization.
I have strong technical skills and hands-on project experience.

I recently built an AI Resume & Portfolio Builder using
machine learning and Streamlit to automate document creation.

I am motivated, adaptable, and eager to contribute effectively.

Thank you for your time and consideration.

Sincerely,
Applicant
";

/// Portfolio profile. Placeholders: `{role}`, `{email}`, `{github}`, `{linkedin}`.
pub const PORTFOLIO_TEMPLATE: &str = "PORTFOLIO PROFILE \u{2013} {role}

ABOUT ME
Aspiring professional with strong interest in AI and software.

TECHNICAL SKILLS
- Python, SQL
- Machine Learning, NLP
- Streamlit
- Git, Jupyter, VS Code

PROJECTS
AI Resume & Portfolio Builder
- Built a resume classification model.
- Integrated into a Streamlit web app.

CAREER OBJECTIVE
To apply technical skills, grow professionally, and
contribute to innovative projects.

CONTACT
Email: {email}
GitHub: {github}
LinkedIn: {linkedin}
";

pub const PLACEHOLDER_EMAIL: &str = "your_email@example.com";
pub const PLACEHOLDER_GITHUB: &str = "https://github.com/yourprofile";
pub const PLACEHOLDER_LINKEDIN: &str = "https://linkedin.com/in/yourprofile";

/// Replaces every `{name}` whose name appears in `values`. Unknown placeholders are left
/// as-is, and substituted values are never rescanned.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
