mod cycle_analyzer_tests;
