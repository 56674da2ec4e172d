mod properties_tests;
