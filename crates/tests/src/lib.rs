#[cfg(test)]
mod common;

#[cfg(test)]
mod donor_post_tests;

#[cfg(test)]
mod volunteer_lifecycle_tests;

#[cfg(test)]
mod admin_aggregation_tests;

#[cfg(test)]
mod auth_form_tests;

#[cfg(test)]
mod snapshot_tests;
