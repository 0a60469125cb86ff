mod analysis_tests;
mod verification_tests;
mod voting_tests;

use text_verifier::prelude::*;
