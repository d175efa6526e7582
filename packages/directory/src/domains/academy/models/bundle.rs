use serde::Serialize;

use super::resource::{AcademyCategory, Resource};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LearningResources {
    pub highlighted: Vec<Resource>,
    pub other: Vec<Resource>,
}

/// Academy resources grouped per section, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcademyBundle {
    pub learning: LearningResources,
    pub tools: Vec<Resource>,
    pub wallets: Vec<Resource>,
    pub contributions: Vec<Resource>,
    pub newsfeed: Vec<Resource>,
}

impl AcademyBundle {
    pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut bundle = Self::default();
        for resource in resources {
            let section = match resource.category {
                AcademyCategory::Learning if resource.highlighted => {
                    &mut bundle.learning.highlighted
                }
                AcademyCategory::Learning => &mut bundle.learning.other,
                AcademyCategory::Tools => &mut bundle.tools,
                AcademyCategory::Wallets => &mut bundle.wallets,
                AcademyCategory::Contribute => &mut bundle.contributions,
                AcademyCategory::NewsFeed => &mut bundle.newsfeed,
            };
            section.push(resource);
        }
        bundle
    }

    /// The regular list of a section. Highlighted learning resources are not part of it.
    pub fn resources(&self, category: AcademyCategory) -> &[Resource] {
        match category {
            AcademyCategory::Learning => &self.learning.other,
            AcademyCategory::Tools => &self.tools,
            AcademyCategory::Wallets => &self.wallets,
            AcademyCategory::Contribute => &self.contributions,
            AcademyCategory::NewsFeed => &self.newsfeed,
        }
    }

    pub fn len(&self) -> usize {
        self.learning.highlighted.len()
            + AcademyCategory::ALL
                .into_iter()
                .map(|category| self.resources(category).len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
