use std::collections::BTreeSet;

use super::adaptors::jobs::spec::JobPosting;

pub const DEPARTMENTS: [&str; 10] = [
    "Mathematics",
    "Statistics",
    "Computer Science",
    "Information Technology",
    "Physics",
    "Chemistry",
    "Biology",
    "Engineering",
    "Economics",
    "Management",
];

pub const LEVELS: [&str; 6] = [
    "Assistant Professor",
    "Associate Professor",
    "Professor",
    "Lecturer",
    "Research Scientist",
    "Postdoc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Department,
    Level,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    departments: BTreeSet<String>,
    levels: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
    }

    pub fn departments(&self) -> &BTreeSet<String> {
        &self.departments
    }

    pub fn levels(&self) -> &BTreeSet<String> {
        &self.levels
    }

    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let set = match facet {
            Facet::Department => &mut self.departments,
            Facet::Level => &mut self.levels,
        };
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        match facet {
            Facet::Department => self.departments.contains(value),
            Facet::Level => self.levels.contains(value),
        }
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.departments.clear();
        self.levels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.departments.is_empty() && self.levels.is_empty()
    }

    /// AND across search and facets, OR within a facet.
    pub fn matches(&self, job: &JobPosting) -> bool {
        if !self.search.is_empty() && !job.searchable_text().contains(&self.search) {
            return false;
        }
        if !self.departments.is_empty()
            && !job.departments.iter().any(|d| self.departments.contains(d))
        {
            return false;
        }
        if !self.levels.is_empty() && !job.levels.iter().any(|l| self.levels.contains(l)) {
            return false;
        }
        true
    }
}

pub fn filter_jobs<'a, I>(jobs: I, filters: &FilterState) -> Vec<&'a JobPosting>
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    jobs.into_iter().filter(|job| filters.matches(job)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::seed;
    use proptest::{prelude::*, sample::subsequence};

    fn ids(jobs: &[&JobPosting]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let jobs = seed::jobs();
        let filtered = filter_jobs(&jobs, &FilterState::new());
        assert_eq!(ids(&filtered), vec!["job1", "job2", "job3"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let jobs = seed::jobs();
        let mut filters = FilterState::new();
        filters.set_search("PHYSICS");
        assert_eq!(filters.search(), "physics");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job3"]);
        filters.set_search("physics");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job3"]);
    }

    #[test]
    fn test_search_covers_institution_and_location() {
        let jobs = seed::jobs();
        let mut filters = FilterState::new();
        filters.set_search("pilani");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job2"]);
        filters.set_search("bihar");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job1"]);
        filters.set_search("control theory");
        assert!(filter_jobs(&jobs, &filters).is_empty());
    }

    #[test]
    fn test_department_facet_is_a_union() {
        let jobs = seed::jobs();
        let mut filters = FilterState::new();
        filters.toggle(Facet::Department, "Mathematics");
        filters.toggle(Facet::Department, "Physics");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job1", "job3"]);
    }

    #[test]
    fn test_facets_combine_with_and() {
        let jobs = seed::jobs();
        let mut filters = FilterState::new();
        filters.toggle(Facet::Department, "Mathematics");
        filters.toggle(Facet::Department, "Physics");
        filters.toggle(Facet::Level, "Associate Professor");
        assert_eq!(ids(&filter_jobs(&jobs, &filters)), vec!["job3"]);
        filters.set_search("patna");
        assert!(filter_jobs(&jobs, &filters).is_empty());
    }

    #[test]
    fn test_toggle_twice_and_clear() {
        let mut filters = FilterState::new();
        assert!(filters.toggle(Facet::Level, "Postdoc"));
        assert!(filters.is_selected(Facet::Level, "Postdoc"));
        assert!(!filters.toggle(Facet::Level, "Postdoc"));
        assert!(filters.is_empty());
        filters.set_search("x");
        filters.toggle(Facet::Department, "Biology");
        filters.clear();
        assert_eq!(filters, FilterState::new());
    }

    const WORDS: [&str; 6] = ["chair", "lab", "iit", "nit", "data", "quantum"];

    prop_compose! {
        fn arb_posting()(
            n in 0u32..1000,
            title in subsequence(WORDS.to_vec(), 0..3),
            departments in subsequence(DEPARTMENTS.to_vec(), 0..4),
            levels in subsequence(LEVELS.to_vec(), 0..3),
        ) -> JobPosting {
            let mut job = seed::jobs().remove(0);
            job.id = format!("job{n}");
            job.title = title.join(" ").to_uppercase();
            job.institution = String::new();
            job.location = String::new();
            job.departments = departments.into_iter().map(String::from).collect();
            job.levels = levels.into_iter().map(String::from).collect();
            job
        }
    }

    prop_compose! {
        fn arb_filters()(
            search in prop_oneof![Just(String::new()), proptest::sample::select(WORDS.to_vec()).prop_map(String::from)],
            departments in subsequence(DEPARTMENTS.to_vec(), 0..3),
            levels in subsequence(LEVELS.to_vec(), 0..2),
        ) -> FilterState {
            let mut filters = FilterState::new();
            filters.set_search(&search);
            for d in departments {
                filters.toggle(Facet::Department, d);
            }
            for l in levels {
                filters.toggle(Facet::Level, l);
            }
            filters
        }
    }

    fn passes_every_constraint(job: &JobPosting, filters: &FilterState) -> bool {
        let search_ok = filters.search().is_empty()
            || job.searchable_text().contains(filters.search());
        let department_ok = filters.departments().is_empty()
            || job.departments.iter().any(|d| filters.departments().contains(d));
        let level_ok =
            filters.levels().is_empty() || job.levels.iter().any(|l| filters.levels().contains(l));
        search_ok && department_ok && level_ok
    }

    proptest! {
        #[test]
        fn prop_empty_filters_keep_whole_store(jobs in proptest::collection::vec(arb_posting(), 0..20)) {
            let filtered = filter_jobs(&jobs, &FilterState::new());
            let all: Vec<&JobPosting> = jobs.iter().collect();
            prop_assert_eq!(ids(&filtered), ids(&all));
        }

        #[test]
        fn prop_results_are_exactly_the_matching_postings(
            jobs in proptest::collection::vec(arb_posting(), 0..20),
            filters in arb_filters(),
        ) {
            let filtered = filter_jobs(&jobs, &filters);
            for job in &filtered {
                prop_assert!(passes_every_constraint(job, &filters));
            }
            let excluded = jobs
                .iter()
                .filter(|job| !filtered.iter().any(|kept| std::ptr::eq(*kept, *job)));
            for job in excluded {
                prop_assert!(!passes_every_constraint(job, &filters));
            }
        }
    }
}
