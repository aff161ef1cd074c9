// src/services/mock.rs
//
// Canned replies used when no live backend or model is reachable. Topic
// detection is plain lowercase substring matching against an ordered keyword
// chain; the first group that matches wins.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::message::{ChatTurn, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Tech,
    Resume,
    FrontendResume,
    DataScienceResume,
    Interview,
    Skills,
    FrontendDetail,
    DataScienceDetail,
    Greeting,
    CareerAdvice,
    Education,
    JobSearch,
    Default,
}

const TECH_KEYWORDS: &[&str] = &["tech", "transition", "change career"];
const RESUME_KEYWORDS: &[&str] = &["resume", "cv"];
const FRONTEND_MARKERS: &[&str] = &["frontend", "front-end", "front end"];
const DATA_SCIENCE_MARKERS: &[&str] = &["data science", "datascience"];
const DETAIL_KEYWORDS: &[&str] = &["more", "elaborate", "detail"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hey there", "greetings"];
const CAREER_KEYWORDS: &[&str] = &["career", "job", "profession", "work"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "school", "study"];
const JOB_SEARCH_KEYWORDS: &[&str] = &["find", "search", "apply", "hiring"];

/// Pick the reply topic for a message. The resume group is refined to a
/// specialty when the message also names one; the detail group only fires
/// when the previous assistant turn gave resume advice for a specialty we
/// can actually expand on, otherwise matching continues down the chain.
pub fn detect_topic(message: &str, history: &[ChatTurn]) -> Topic {
    let msg = message.to_lowercase();

    if contains_any(&msg, TECH_KEYWORDS) {
        return Topic::Tech;
    }
    if contains_any(&msg, RESUME_KEYWORDS) {
        if contains_any(&msg, FRONTEND_MARKERS) {
            return Topic::FrontendResume;
        }
        if contains_any(&msg, DATA_SCIENCE_MARKERS) {
            return Topic::DataScienceResume;
        }
        return Topic::Resume;
    }
    if msg.contains("interview") {
        return Topic::Interview;
    }
    if msg.contains("skill") {
        return Topic::Skills;
    }
    if contains_any(&msg, DETAIL_KEYWORDS) {
        if let Some(topic) = elaboration_context(history) {
            return topic;
        }
    }
    if contains_any(&msg, GREETING_KEYWORDS) {
        return Topic::Greeting;
    }
    if contains_any(&msg, CAREER_KEYWORDS) {
        return Topic::CareerAdvice;
    }
    if contains_any(&msg, EDUCATION_KEYWORDS) {
        return Topic::Education;
    }
    if contains_any(&msg, JOB_SEARCH_KEYWORDS) {
        return Topic::JobSearch;
    }

    Topic::Default
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// A "tell me more" only makes sense if our last reply was specialty resume
// advice; look backwards for the most recent assistant turn and see what it
// talked about.
fn elaboration_context(history: &[ChatTurn]) -> Option<Topic> {
    let prev = history.iter().rev().find(|t| t.role == Role::Assistant)?;
    let prev = prev.content.to_lowercase();

    if !prev.contains("resume") {
        return None;
    }
    if contains_any(&prev, FRONTEND_MARKERS) {
        return Some(Topic::FrontendDetail);
    }
    if contains_any(&prev, DATA_SCIENCE_MARKERS) {
        return Some(Topic::DataScienceDetail);
    }
    None
}

const TECH_REPLIES: &[&str] = &[
    "Transitioning to a tech career typically involves: 1) Identifying your target role, 2) Learning relevant skills through courses or bootcamps, 3) Building projects for your portfolio, 4) Networking with professionals, and 5) Applying for entry-level positions or internships. What specific tech role interests you?",
    "Career changes into tech are very doable. Start by picking a target role, then build a small portfolio of projects that prove you can already do the work. Which area of tech are you drawn to?",
];

const RESUME_REPLIES: &[&str] = &[
    "To improve your resume: 1) Use a clean, professional template, 2) Include quantifiable achievements, 3) Tailor it to each job application, 4) Use action verbs, 5) Keep it concise (1-2 pages), and 6) Proofread carefully. Would you like more specific advice for your situation?",
    "A strong resume leads with impact: put your most relevant experience first, quantify results wherever you can, and cut anything that doesn't support the role you're targeting. What kind of position are you applying for?",
];

const FRONTEND_RESUME_REPLIES: &[&str] = &[
    "For a front-end developer resume, lead with the technologies you actually ship: highlight your JavaScript framework, responsive layouts, and accessibility work, and link to a portfolio or live projects. Keep the visual design of the resume itself clean and simple.",
    "On a front-end resume, recruiters look for shipped interfaces. List the frameworks you know, call out performance or accessibility wins with numbers, and include links to deployed work or a GitHub profile.",
];

const DATA_SCIENCE_RESUME_REPLIES: &[&str] = &[
    "For a data science resume, describe projects end to end: the question, the data, the models you tried, and the measurable outcome. List your toolkit (Python, SQL, pandas, scikit-learn) and link to notebooks or repositories.",
    "A data science resume should prove you can turn data into decisions. Quantify model impact against a baseline, name the datasets and techniques you used, and keep a portfolio of notebooks ready to share.",
];

const INTERVIEW_REPLIES: &[&str] = &[
    "For interview preparation: 1) Research the company thoroughly, 2) Practice common questions, 3) Prepare your own questions, 4) Use the STAR method for behavioral questions, 5) Dress professionally, and 6) Follow up with a thank-you note. Is there a specific type of interview you're preparing for?",
    "Good interviews are rehearsed conversations. Research the company, prepare stories in STAR form, and have two or three sharp questions ready for the interviewer. What role is the interview for?",
];

const SKILLS_REPLIES: &[&str] = &[
    "To identify which skills to develop, consider: 1) Job postings in your target field, 2) Industry trends, 3) Informational interviews with professionals, and 4) Your existing transferable skills. What career path are you considering?",
    "Focus on developing both hard skills (technical) and soft skills (interpersonal).",
    "Continuous learning and skill development are key to career success.",
];

const FRONTEND_DETAIL_REPLIES: &[&str] = &[
    "Happy to go deeper on the front-end side. Structure it as: a two-line summary naming your strongest framework, a skills row (HTML/CSS/JavaScript plus your framework and tooling), then project entries that each name the interface you built, the stack, and one measurable result such as a load-time or conversion improvement.",
    "In more detail: front-end hiring managers scan for evidence you can own a feature. For each project, state what you built, the framework, how you tested it, and a before/after metric. A linked live demo is worth more than a paragraph of buzzwords.",
];

const DATA_SCIENCE_DETAIL_REPLIES: &[&str] = &[
    "Going deeper on the data science side: organize each project entry as question, dataset, method, result. Name the models and why you chose them, quantify lift against a baseline, and mention deployment or stakeholder outcomes where you can.",
    "In more detail: for data science roles, recruiters want the full arc of at least one project -- the business question, the messy data, the modeling choices, and the measured outcome. Lead with that project and trim anything you couldn't defend in an interview.",
];

const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm your career counselor. How can I help you today?",
    "Hi there! I'm here to help you with your career questions.",
    "Welcome! I'm excited to help you explore your career options.",
];

const CAREER_ADVICE_REPLIES: &[&str] = &[
    "Based on your interests, I'd recommend exploring careers in technology, healthcare, or creative fields.",
    "Consider your strengths and passions when choosing a career path.",
    "It's important to research different career options and talk to professionals in those fields.",
];

const EDUCATION_REPLIES: &[&str] = &[
    "Education requirements vary by career. Some careers require degrees, while others focus on experience and certifications.",
    "Consider both traditional education and alternative learning paths like online courses and bootcamps.",
    "Research the educational requirements for your desired career path.",
];

const JOB_SEARCH_REPLIES: &[&str] = &[
    "Start by updating your resume and building a professional online presence.",
    "Network with professionals in your desired field and attend industry events.",
    "Use job boards, LinkedIn, and company websites to find opportunities.",
];

const DEFAULT_REPLIES: &[&str] = &[
    "I'm a career counselor bot that can help with career advice, resume tips, and interview preparation. How can I assist you today?",
    "That's an interesting question! Could you tell me more about your specific situation?",
    "I'd be happy to help you with that. What aspects would you like to explore further?",
];

/// Immutable topic -> candidate replies table, built once at startup and
/// shared by reference.
pub struct MockCatalog {
    sets: HashMap<Topic, &'static [&'static str]>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        let sets = HashMap::from([
            (Topic::Tech, TECH_REPLIES),
            (Topic::Resume, RESUME_REPLIES),
            (Topic::FrontendResume, FRONTEND_RESUME_REPLIES),
            (Topic::DataScienceResume, DATA_SCIENCE_RESUME_REPLIES),
            (Topic::Interview, INTERVIEW_REPLIES),
            (Topic::Skills, SKILLS_REPLIES),
            (Topic::FrontendDetail, FRONTEND_DETAIL_REPLIES),
            (Topic::DataScienceDetail, DATA_SCIENCE_DETAIL_REPLIES),
            (Topic::Greeting, GREETING_REPLIES),
            (Topic::CareerAdvice, CAREER_ADVICE_REPLIES),
            (Topic::Education, EDUCATION_REPLIES),
            (Topic::JobSearch, JOB_SEARCH_REPLIES),
            (Topic::Default, DEFAULT_REPLIES),
        ]);
        Self { sets }
    }

    /// All candidate replies for a topic.
    pub fn candidates(&self, topic: Topic) -> &'static [&'static str] {
        self.sets.get(&topic).copied().unwrap_or(DEFAULT_REPLIES)
    }

    /// Pick a reply for the topic uniformly at random.
    pub fn pick(&self, topic: Topic) -> &'static str {
        self.pick_with(&mut rand::thread_rng(), topic)
    }

    /// Same as [`pick`](Self::pick) with a caller-supplied random source, so
    /// tests can seed the selection.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R, topic: Topic) -> &'static str {
        self.candidates(topic)
            .choose(rng)
            .copied()
            .unwrap_or(crate::message::CONNECTION_TROUBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_replies() {
        let catalog = MockCatalog::new();
        for topic in [
            Topic::Tech,
            Topic::Resume,
            Topic::FrontendResume,
            Topic::DataScienceResume,
            Topic::Interview,
            Topic::Skills,
            Topic::FrontendDetail,
            Topic::DataScienceDetail,
            Topic::Greeting,
            Topic::CareerAdvice,
            Topic::Education,
            Topic::JobSearch,
            Topic::Default,
        ] {
            let set = catalog.candidates(topic);
            assert!(!set.is_empty(), "{topic:?} has no replies");
            assert!(set.iter().all(|r| !r.trim().is_empty()));
        }
    }

    #[test]
    fn specialty_replies_carry_their_markers() {
        // The elaboration rule keys off these words appearing in our own
        // earlier reply, so the reply sets have to contain them.
        let catalog = MockCatalog::new();
        for reply in catalog.candidates(Topic::FrontendResume) {
            let lower = reply.to_lowercase();
            assert!(lower.contains("resume") && lower.contains("front-end"));
        }
        for reply in catalog.candidates(Topic::DataScienceResume) {
            let lower = reply.to_lowercase();
            assert!(lower.contains("resume") && lower.contains("data science"));
        }
    }
}
