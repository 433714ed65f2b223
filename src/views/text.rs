//! Plain-text rendering of pages.

use std::fmt::{self, Display, Formatter};

use super::{Entry, ListingBody, Page, PageBody};
use crate::models::{
    CareerPath, ForumPost, IndustryInsight, Job, Scholarship, StartupResource, SubjectConnection,
    UniversityProgram,
};

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        match &self.body {
            PageBody::Detail { record } => {
                writeln!(f)?;
                write!(f, "{}", record)
            }
            PageBody::Home { features } => {
                writeln!(f, "{}", self.tagline)?;
                for feature in features {
                    writeln!(f)?;
                    writeln!(
                        f,
                        "{} ({})  {} entries",
                        feature.title, feature.path, feature.records
                    )?;
                    writeln!(f, "    {}", feature.description)?;
                }
                Ok(())
            }
            PageBody::About { sections } => {
                writeln!(f, "{}", self.tagline)?;
                for section in sections.iter() {
                    writeln!(f)?;
                    writeln!(f, "{}", section.title)?;
                    writeln!(f, "    {}", section.text)?;
                }
                Ok(())
            }
            PageBody::Listing(listing) => {
                writeln!(f, "{}", self.tagline)?;
                write!(f, "{}", listing)
            }
        }
    }
}

impl Display for ListingBody<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut controls = Vec::new();
        if self.search_enabled {
            controls.push(format!("search: {:?}", self.query.search_text()));
        }
        for selector in &self.selectors {
            controls.push(format!("{}: {}", selector.axis, selector.selected));
        }
        if !controls.is_empty() {
            writeln!(f)?;
            writeln!(f, "[{}]", controls.join("  "))?;
        }

        writeln!(f, "Showing {} of {}", self.results.len(), self.total)?;

        if let Some(message) = self.empty_message {
            writeln!(f)?;
            return writeln!(f, "{}", message);
        }

        for entry in &self.results {
            writeln!(f)?;
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl Display for Entry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Forum(post) => forum_post(f, post),
            Entry::University(program) => university_program(f, program),
            Entry::Career(path) => career_path(f, path),
            Entry::Job(job) => job_listing(f, job),
            Entry::Scholarship(scholarship) => scholarship_listing(f, scholarship),
            Entry::Insight(insight) => industry_insight(f, insight),
            Entry::Subject(subject) => subject_connection(f, subject),
            Entry::Startup(resource) => startup_resource(f, resource),
        }
    }
}

fn bullets(f: &mut Formatter<'_>, label: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "    {}:", label)?;
    for item in items {
        writeln!(f, "      • {}", item)?;
    }
    Ok(())
}

fn forum_post(f: &mut Formatter<'_>, post: &ForumPost) -> fmt::Result {
    writeln!(f, "#{} {}", post.id, post.title)?;
    writeln!(
        f,
        "    {} | {} | {}",
        post.category,
        post.author.byline(),
        post.created_at.format("%Y-%m-%d")
    )?;
    writeln!(f, "    {}", post.content)?;
    if !post.tags.is_empty() {
        writeln!(f, "    tags: {}", post.tags.join(", "))?;
    }
    writeln!(
        f,
        "    {} likes · {} replies · {} views",
        post.likes, post.replies, post.views
    )
}

fn university_program(f: &mut Formatter<'_>, program: &UniversityProgram) -> fmt::Result {
    writeln!(f, "#{} {}", program.id, program.university_name)?;
    writeln!(
        f,
        "    {} {} | {} | {} | rating {:.1}",
        program.degree,
        program.program_name,
        program.location,
        program.duration,
        program.average_rating
    )?;
    if !program.accreditation.is_empty() {
        writeln!(f, "    accreditation: {}", program.accreditation.join(", "))?;
    }
    if let Some(score) = program.employability_score {
        writeln!(f, "    employability: {}%", score)?;
    }
    if program.research_opportunities == Some(true) {
        writeln!(f, "    research opportunities available")?;
    }
    writeln!(f, "    {}", program.overview)?;
    bullets(f, "Pros", &program.pros)?;
    bullets(f, "Cons", &program.cons)?;
    if !program.reviews.is_empty() {
        writeln!(f, "    {} reviews", program.reviews.len())?;
    }
    Ok(())
}

fn career_path(f: &mut Formatter<'_>, path: &CareerPath) -> fmt::Result {
    writeln!(f, "#{} {}", path.id, path.title)?;
    writeln!(f, "    {} | {}", path.discipline, path.salary_range)?;
    writeln!(f, "    {}", path.overview)?;
    writeln!(f, "    skills: {}", path.skills.join(", "))?;
    writeln!(f, "    industries: {}", path.industries.join(", "))?;
    writeln!(f, "    outlook: {}", path.growth_outlook)?;
    writeln!(f, "    education: {}", path.education_required)?;
    for story in &path.experience_stories {
        writeln!(
            f,
            "    story: {} by {} ({}, {} years)",
            story.title,
            story.author.name,
            story.current_position,
            story.years_of_experience
        )?;
    }
    Ok(())
}

fn job_listing(f: &mut Formatter<'_>, job: &Job) -> fmt::Result {
    writeln!(f, "#{} {}", job.id, job.title)?;
    writeln!(f, "    {} | {}", job.company, job.location)?;
    write!(f, "    {} | {} | {}", job.job_type, job.experience_level, job.discipline)?;
    if let Some(salary) = &job.salary {
        write!(f, " | {}", salary)?;
    }
    writeln!(f, " | posted {}", job.posted_date)?;
    writeln!(f, "    {}", job.description)?;
    bullets(f, "Requirements", &job.requirements)?;
    writeln!(f, "    apply: {}", job.application_url)
}

fn scholarship_listing(f: &mut Formatter<'_>, scholarship: &Scholarship) -> fmt::Result {
    writeln!(f, "#{} {}", scholarship.id, scholarship.name)?;
    writeln!(
        f,
        "    {} | {} | {} | {}",
        scholarship.provider, scholarship.country, scholarship.level, scholarship.funded
    )?;
    writeln!(f, "    {} | deadline {}", scholarship.amount, scholarship.deadline)?;
    if !scholarship.disciplines.is_empty() {
        writeln!(f, "    disciplines: {}", scholarship.disciplines.join(", "))?;
    }
    writeln!(f, "    {}", scholarship.description)?;
    bullets(f, "Eligibility", &scholarship.eligibility)?;
    writeln!(f, "    apply: {}", scholarship.application_url)
}

fn industry_insight(f: &mut Formatter<'_>, insight: &IndustryInsight) -> fmt::Result {
    writeln!(f, "#{} {}", insight.id, insight.title)?;
    writeln!(
        f,
        "    {} | {} | {} | {}",
        insight.industry,
        insight.discipline,
        insight.author.byline(),
        insight.created_at
    )?;
    writeln!(f, "    {}", insight.content)?;
    if !insight.topics.is_empty() {
        writeln!(f, "    topics: {}", insight.topics.join(", "))?;
    }
    writeln!(
        f,
        "    {} views · {} found this helpful",
        insight.views, insight.helpful
    )
}

fn subject_connection(f: &mut Formatter<'_>, subject: &SubjectConnection) -> fmt::Result {
    writeln!(f, "#{} {}", subject.id, subject.subject)?;
    writeln!(f, "    {}", subject.description)?;
    bullets(f, "Related subjects", &subject.related_subjects)?;
    bullets(f, "Applications", &subject.applications)?;
    bullets(f, "Career paths", &subject.career_paths)
}

fn startup_resource(f: &mut Formatter<'_>, resource: &StartupResource) -> fmt::Result {
    writeln!(f, "#{} {}", resource.id, resource.title)?;
    write!(f, "    {} | {}", resource.category, resource.provider)?;
    if let Some(location) = &resource.location {
        write!(f, " | {}", location)?;
    }
    writeln!(f)?;
    writeln!(f, "    {}", resource.description)?;
    if let Some(eligibility) = &resource.eligibility {
        bullets(f, "Eligibility", eligibility)?;
    }
    if let Some(link) = &resource.link {
        writeln!(f, "    link: {}", link)?;
    }
    Ok(())
}
